use crate::inspector::resource_kind::ResourceKind;
use crate::robots::Verdict;
use serde::Serialize;
use url::Url;

/// The result of checking one resource URL: its HTTP status and content
/// classification paired with the robots.txt verdict for the chosen agent.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceReport {
    pub url: Url,
    pub status_code: Option<u16>,
    pub resource_kind: ResourceKind,
    pub verdict: Option<Verdict>,
    pub error: Option<String>,
}

impl ResourceReport {
    pub fn new(url: Url, status_code: u16, resource_kind: ResourceKind, verdict: Verdict) -> Self {
        Self {
            url,
            status_code: Some(status_code),
            resource_kind,
            verdict: Some(verdict),
            error: None,
        }
    }

    pub fn fetch_failed(url: Url, verdict: Verdict, error: String) -> Self {
        Self {
            url,
            status_code: None,
            resource_kind: ResourceKind::Other,
            verdict: Some(verdict),
            error: Some(error),
        }
    }

    pub fn evaluate_failed(url: Url, error: String) -> Self {
        Self {
            url,
            status_code: None,
            resource_kind: ResourceKind::Other,
            verdict: None,
            error: Some(error),
        }
    }

    pub fn describe_verdict(&self) -> String {
        match &self.verdict {
            Some(verdict) => verdict.describe(),
            None => String::from("not evaluated"),
        }
    }
}
