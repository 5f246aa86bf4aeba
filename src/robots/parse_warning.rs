use serde::Serialize;
use std::fmt;

/// Non-fatal observations made while parsing. Warnings are carried inside the
/// `ParseResult` rather than raised; real-world robots.txt files are
/// frequently non-conformant and parsing is best-effort structuring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParseWarning {
    EmptyInput,
    UnknownDirective { line_number: usize, name: String },
    UnknownLine { line_number: usize },
    UngroupedRule { line_number: usize },
    BadCrawlDelay { line_number: usize, value: String },
    BadSitemapUrl { line_number: usize, value: String },
}

impl ParseWarning {
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParseWarning::EmptyInput => None,
            ParseWarning::UnknownDirective { line_number, .. }
            | ParseWarning::UnknownLine { line_number }
            | ParseWarning::UngroupedRule { line_number }
            | ParseWarning::BadCrawlDelay { line_number, .. }
            | ParseWarning::BadSitemapUrl { line_number, .. } => Some(*line_number),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::EmptyInput => write!(f, "robots.txt is empty"),
            ParseWarning::UnknownDirective { line_number, name } => {
                write!(f, "line {line_number}: unknown directive {name:?}")
            }
            ParseWarning::UnknownLine { line_number } => {
                write!(f, "line {line_number}: not a directive")
            }
            ParseWarning::UngroupedRule { line_number } => {
                write!(f, "line {line_number}: rule appears before any User-agent line")
            }
            ParseWarning::BadCrawlDelay { line_number, value } => {
                write!(f, "line {line_number}: crawl-delay value {value:?} is not a number")
            }
            ParseWarning::BadSitemapUrl { line_number, value } => {
                write!(f, "line {line_number}: sitemap value {value:?} is not a valid URL")
            }
        }
    }
}
