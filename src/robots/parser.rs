use crate::robots::directive::{Directive, DirectiveKind};
use crate::robots::group::{Group, PathRule};
use crate::robots::parse_result::ParseResult;
use crate::robots::parse_warning::ParseWarning;
use url::Url;

enum Cursor {
    /// Before any User-agent line; rules landing here are ungrouped.
    Outside,
    /// The last directive was a User-agent line; another one extends the
    /// same group's agent set.
    AgentList(usize),
    /// Inside a group after at least one rule line; the next User-agent
    /// starts a new group.
    Rules(usize),
}

impl Cursor {
    fn group_id(&self) -> Option<usize> {
        match self {
            Cursor::Outside => None,
            Cursor::AgentList(id) | Cursor::Rules(id) => Some(*id),
        }
    }
}

/// Parses robots.txt text into an ordered sequence of directive records plus
/// the derived rule groups. Never fails: malformed lines become `Unknown`
/// directives with a warning attached, so every input line keeps a record.
pub fn parse(text: &str) -> ParseResult {
    let mut directives: Vec<Directive> = Vec::new();
    let mut groups: Vec<Group> = Vec::new();
    let mut sitemaps: Vec<String> = Vec::new();
    let mut warnings: Vec<ParseWarning> = Vec::new();
    let mut cursor = Cursor::Outside;

    if text.trim().is_empty() {
        warnings.push(ParseWarning::EmptyInput);
    }

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        // Blank lines and whole-line comments produce no directive and do not
        // move the group cursor.
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = match line.find('#') {
            Some(offset) => line[..offset].trim_end(),
            None => line,
        };

        let Some((name, argument)) = line.split_once(':') else {
            directives.push(Directive {
                line_number,
                kind: DirectiveKind::Unknown,
                value: line.to_string(),
                group_id: None,
            });
            warnings.push(ParseWarning::UnknownLine { line_number });
            continue;
        };
        let name = name.trim();
        let value = argument.trim().to_string();

        match DirectiveKind::from_name(name) {
            DirectiveKind::UserAgent => {
                let group_id = match cursor {
                    Cursor::AgentList(id) => {
                        groups[id].agents.push(value.clone());
                        id
                    }
                    _ => {
                        groups.push(Group::new(value.clone()));
                        groups.len() - 1
                    }
                };
                cursor = Cursor::AgentList(group_id);
                directives.push(Directive {
                    line_number,
                    kind: DirectiveKind::UserAgent,
                    value,
                    group_id: Some(group_id),
                });
            }
            kind @ (DirectiveKind::Allow | DirectiveKind::Disallow) => {
                let group_id = cursor.group_id();
                match group_id {
                    Some(id) => {
                        groups[id].rules.push(PathRule {
                            line_number,
                            allow: kind == DirectiveKind::Allow,
                            pattern: value.clone(),
                        });
                        cursor = Cursor::Rules(id);
                    }
                    None => warnings.push(ParseWarning::UngroupedRule { line_number }),
                }
                directives.push(Directive {
                    line_number,
                    kind,
                    value,
                    group_id,
                });
            }
            DirectiveKind::CrawlDelay => {
                let group_id = cursor.group_id();
                match group_id {
                    Some(id) => {
                        match value.parse::<f64>() {
                            Ok(seconds) if seconds >= 0.0 => {
                                groups[id].crawl_delay = Some(seconds);
                            }
                            _ => warnings.push(ParseWarning::BadCrawlDelay {
                                line_number,
                                value: value.clone(),
                            }),
                        }
                        cursor = Cursor::Rules(id);
                    }
                    None => warnings.push(ParseWarning::UngroupedRule { line_number }),
                }
                directives.push(Directive {
                    line_number,
                    kind: DirectiveKind::CrawlDelay,
                    value,
                    group_id,
                });
            }
            DirectiveKind::Sitemap => {
                // Sitemap lines are global and leave the group cursor alone.
                if Url::parse(&value).is_err() {
                    warnings.push(ParseWarning::BadSitemapUrl {
                        line_number,
                        value: value.clone(),
                    });
                }
                sitemaps.push(value.clone());
                directives.push(Directive {
                    line_number,
                    kind: DirectiveKind::Sitemap,
                    value,
                    group_id: None,
                });
            }
            DirectiveKind::Unknown => {
                directives.push(Directive {
                    line_number,
                    kind: DirectiveKind::Unknown,
                    value: line.to_string(),
                    group_id: cursor.group_id(),
                });
                warnings.push(ParseWarning::UnknownDirective {
                    line_number,
                    name: name.to_string(),
                });
            }
        }
    }

    ParseResult {
        directives,
        groups,
        sitemaps,
        warnings,
    }
}
