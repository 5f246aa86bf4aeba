use crate::robots::directive::Directive;
use crate::robots::group::Group;
use crate::robots::parse_warning::ParseWarning;
use serde::Serialize;

/// The full parse of one robots.txt document: every line's directive record
/// in source order, the derived rule groups used for evaluation, the global
/// sitemap list, and any per-line warnings. Never mutated after parsing;
/// re-parsing produces a fresh value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub directives: Vec<Directive>,
    pub groups: Vec<Group>,
    pub sitemaps: Vec<String>,
    pub warnings: Vec<ParseWarning>,
}

impl ParseResult {
    pub fn directive_at_line(&self, line_number: usize) -> Option<&Directive> {
        self.directives
            .iter()
            .find(|d| d.line_number == line_number)
    }

    pub fn warnings_at_line(&self, line_number: usize) -> impl Iterator<Item = &ParseWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.line_number() == Some(line_number))
    }
}
