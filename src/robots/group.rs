use serde::Serialize;

/// One Allow or Disallow line, kept in source order inside its group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRule {
    pub line_number: usize,
    pub allow: bool,
    pub pattern: String,
}

/// A block of rules scoped to one or more user-agent tokens. Consecutive
/// `User-agent` lines share a single rule block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub agents: Vec<String>,
    pub rules: Vec<PathRule>,
    pub crawl_delay: Option<f64>,
}

impl Group {
    pub fn new(agent: String) -> Self {
        Self {
            agents: vec![agent],
            rules: Vec::new(),
            crawl_delay: None,
        }
    }

    /// Agent tokens compare case-insensitively.
    pub fn applies_to(&self, token: &str) -> bool {
        self.agents.iter().any(|a| a.eq_ignore_ascii_case(token))
    }

    pub fn is_wildcard(&self) -> bool {
        self.agents.iter().any(|a| a == "*")
    }
}
