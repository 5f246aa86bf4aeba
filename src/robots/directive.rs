use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DirectiveKind {
    UserAgent,
    Allow,
    Disallow,
    Sitemap,
    CrawlDelay,
    Unknown,
}

impl DirectiveKind {
    /// Directive names are matched case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "user-agent" => DirectiveKind::UserAgent,
            "allow" => DirectiveKind::Allow,
            "disallow" => DirectiveKind::Disallow,
            "sitemap" => DirectiveKind::Sitemap,
            "crawl-delay" => DirectiveKind::CrawlDelay,
            _ => DirectiveKind::Unknown,
        }
    }
}

/// One parsed robots.txt line. For recognized directives `value` holds the
/// trimmed argument; for unrecognized lines it holds the raw line so that a
/// line-by-line display has a record for every input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directive {
    pub line_number: usize,
    pub kind: DirectiveKind,
    pub value: String,
    pub group_id: Option<usize>,
}
