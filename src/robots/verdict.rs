use crate::robots::group::PathRule;
use serde::Serialize;

/// The outcome of evaluating one path for one user-agent token. When no rule
/// matched, `matched_rule` is `None` and the verdict is the default allow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub allowed: bool,
    pub matched_group: Option<usize>,
    pub matched_rule: Option<PathRule>,
}

impl Verdict {
    pub fn default_allow() -> Self {
        Self {
            allowed: true,
            matched_group: None,
            matched_rule: None,
        }
    }

    pub fn describe(&self) -> String {
        match &self.matched_rule {
            Some(rule) if self.allowed => format!("Allowed by Allow: {}", rule.pattern),
            Some(rule) => format!("Blocked by Disallow: {}", rule.pattern),
            None => String::from("Allowed (no matching rule)"),
        }
    }
}
