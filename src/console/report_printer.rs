use crate::inspector::InspectionReport;
use crate::robots::{self, DirectiveKind, ParseResult};
use crossterm::style::Stylize;

/// How one robots.txt line affects the chosen agent, for annotation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStatus {
    Allowed,
    Blocked,
    Info,
    Warning,
    Plain,
}

/// Renders the full inspection report: the annotated robots.txt listing,
/// warnings, sitemaps, and the per-path and per-resource verdict tables.
pub struct ReportPrinter;

impl ReportPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &InspectionReport) {
        let title = format!("robots.txt for {} (agent: {})", report.site, report.agent);
        println!("{}", title.bold());
        println!();

        self.print_annotated_lines(report);
        self.print_warnings(&report.parse_result);
        self.print_sitemaps(&report.parse_result);
        self.print_crawl_delay(report);
        self.print_path_verdicts(report);
        self.print_resource_table(report);
    }

    fn print_annotated_lines(&self, report: &InspectionReport) {
        if report.robots_content.is_empty() {
            println!("{}", "(robots.txt is empty, everything is allowed)".dim());
            return;
        }

        let selected = robots::selected_group(&report.parse_result, &report.agent);
        for (index, line) in report.robots_content.lines().enumerate() {
            let line_number = index + 1;
            let status = Self::line_status(&report.parse_result, line_number);
            let marker = match status {
                LineStatus::Allowed => "+".green(),
                LineStatus::Blocked => "x".red(),
                LineStatus::Warning => "!".yellow(),
                LineStatus::Info | LineStatus::Plain => " ".stylize(),
            };
            // Lines belonging to the group the chosen agent resolves to get
            // an extra marker in the gutter.
            let applies = report
                .parse_result
                .directive_at_line(line_number)
                .map(|d| d.group_id.is_some() && d.group_id == selected)
                .unwrap_or(false);
            let applies_marker = if applies { ">" } else { " " };

            let kind = report
                .parse_result
                .directive_at_line(line_number)
                .map(|d| d.kind);
            let styled_line = match kind {
                Some(DirectiveKind::UserAgent) => line.to_string().blue(),
                Some(DirectiveKind::Allow) => line.to_string().green(),
                Some(DirectiveKind::Disallow) => line.to_string().red(),
                Some(DirectiveKind::Sitemap) => line.to_string().yellow(),
                Some(DirectiveKind::CrawlDelay) => line.to_string().cyan(),
                Some(DirectiveKind::Unknown) => line.to_string().dark_yellow(),
                None => line.to_string().dim(),
            };
            println!("{line_number:>4} {applies_marker} {marker} {styled_line}");
        }
        println!();
    }

    fn line_status(parse_result: &ParseResult, line_number: usize) -> LineStatus {
        if parse_result.warnings_at_line(line_number).next().is_some() {
            return LineStatus::Warning;
        }
        let Some(directive) = parse_result.directive_at_line(line_number) else {
            return LineStatus::Plain;
        };
        match directive.kind {
            DirectiveKind::Allow => LineStatus::Allowed,
            // An empty Disallow value blocks nothing and is not flagged as
            // blocking.
            DirectiveKind::Disallow if !directive.value.is_empty() => LineStatus::Blocked,
            DirectiveKind::Unknown => LineStatus::Warning,
            _ => LineStatus::Info,
        }
    }

    fn print_warnings(&self, parse_result: &ParseResult) {
        if parse_result.warnings.is_empty() {
            return;
        }
        println!("{}", "Warnings:".bold());
        for warning in &parse_result.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
        println!();
    }

    fn print_sitemaps(&self, parse_result: &ParseResult) {
        if parse_result.sitemaps.is_empty() {
            return;
        }
        println!("{}", "Sitemaps:".bold());
        for sitemap in &parse_result.sitemaps {
            println!("  {sitemap}");
        }
        println!();
    }

    fn print_crawl_delay(&self, report: &InspectionReport) {
        if let Some(seconds) = robots::crawl_delay_for(&report.parse_result, &report.agent) {
            println!("Crawl-delay for {}: {}s", report.agent, seconds);
            println!();
        }
    }

    fn print_path_verdicts(&self, report: &InspectionReport) {
        if report.path_verdicts.is_empty() {
            return;
        }
        println!("{}", "Path checks:".bold());
        for path_verdict in &report.path_verdicts {
            let marker = if path_verdict.verdict.allowed {
                "+".green()
            } else {
                "x".red()
            };
            println!(
                "  {} {}  {}",
                marker,
                path_verdict.path,
                path_verdict.verdict.describe()
            );
        }
        println!();
    }

    fn print_resource_table(&self, report: &InspectionReport) {
        if report.resources.is_empty() {
            return;
        }

        let rows: Vec<[String; 4]> = report
            .resources
            .iter()
            .map(|r| {
                [
                    r.url.to_string(),
                    r.status_code.map_or_else(|| String::from("-"), |s| s.to_string()),
                    r.resource_kind.to_string(),
                    r.describe_verdict(),
                ]
            })
            .collect();

        let headers = ["URL", "Status", "Type", "Result"];
        let mut widths: [usize; 4] = [0; 4];
        for (column, header) in headers.iter().enumerate() {
            widths[column] = header.len();
        }
        for row in &rows {
            for (column, cell) in row.iter().enumerate() {
                widths[column] = widths[column].max(cell.len());
            }
        }

        println!("{}", "Resource access results:".bold());
        println!(
            "  {:<w0$}  {:<w1$}  {:<w2$}  {}",
            headers[0],
            headers[1],
            headers[2],
            headers[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        );
        for (row, resource) in rows.iter().zip(&report.resources) {
            let result_cell = match &resource.verdict {
                Some(verdict) if verdict.allowed => row[3].clone().green(),
                Some(_) => row[3].clone().red(),
                None => row[3].clone().yellow(),
            };
            println!(
                "  {:<w0$}  {:<w1$}  {:<w2$}  {}",
                row[0],
                row[1],
                row[2],
                result_cell,
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            );
            if let Some(error) = &resource.error {
                println!("  {}", format!("^ {error}").dim());
            }
        }
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new()
    }
}
