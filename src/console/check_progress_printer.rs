use crate::inspector::{ProgressReporter, ResourceReport};
use crossterm::style::Stylize;

/// Prints one line per checked resource while the checks are in flight.
/// The quiet variant is used for JSON output, where stdout must stay clean.
#[derive(Clone)]
pub struct CheckProgressPrinter {
    quiet: bool,
}

impl CheckProgressPrinter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for CheckProgressPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for CheckProgressPrinter {
    fn begin(&self, num_resources: usize) {
        if !self.quiet {
            eprintln!("Checking {num_resources} resources...");
        }
    }

    fn resource_checked(&self, report: &ResourceReport) {
        if self.quiet {
            return;
        }
        let marker = match &report.verdict {
            Some(verdict) if verdict.allowed => "+".green(),
            Some(_) => "x".red(),
            None => "!".yellow(),
        };
        eprintln!("  {} {}", marker, report.url);
    }

    fn end(&self) {}
}
