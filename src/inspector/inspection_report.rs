use crate::inspector::resource_report::ResourceReport;
use crate::robots::{ParseResult, Verdict};
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Serialize)]
pub struct PathVerdict {
    pub path: String,
    pub verdict: Verdict,
}

/// Everything one inspection run produced: the source text, its parse, and
/// the per-path and per-resource verdicts. Serialized as-is for the JSON
/// output mode.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    pub site: Url,
    pub agent: String,
    pub generated_at: DateTime<Utc>,
    pub robots_content: String,
    pub parse_result: ParseResult,
    pub path_verdicts: Vec<PathVerdict>,
    pub resources: Vec<ResourceReport>,
}

impl InspectionReport {
    pub fn new(
        site: Url,
        agent: String,
        robots_content: String,
        parse_result: ParseResult,
        path_verdicts: Vec<PathVerdict>,
        resources: Vec<ResourceReport>,
    ) -> Self {
        Self {
            site,
            agent,
            generated_at: Utc::now(),
            robots_content,
            parse_result,
            path_verdicts,
            resources,
        }
    }
}
