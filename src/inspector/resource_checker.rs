use crate::inspector::inspector_config::InspectorConfig;
use crate::inspector::progress_reporter::ProgressReporter;
use crate::inspector::resource_kind::ResourceKind;
use crate::inspector::resource_report::ResourceReport;
use crate::robots::{self, ParseResult};
use futures::future::join_all;
use std::sync::Arc;
use tokio::select;
use tokio::task::JoinHandle;
use url::Url;

/// Fetches each candidate resource to obtain its HTTP status and content
/// classification, then pairs that with the evaluator's verdict. Checks run
/// as concurrent tasks; a shutdown notification abandons whatever has not
/// finished yet.
pub struct ResourceChecker {
    client: reqwest::Client,
    config: InspectorConfig,
}

impl ResourceChecker {
    pub fn new(client: reqwest::Client, config: InspectorConfig) -> Self {
        Self { client, config }
    }

    pub async fn check_all<TP>(
        &self,
        parse_result: &ParseResult,
        resources: &[Url],
        progress_reporter: TP,
        shutdown_notify: Arc<tokio::sync::Notify>,
    ) -> anyhow::Result<Vec<ResourceReport>>
    where
        TP: ProgressReporter + Clone + Send + 'static,
    {
        progress_reporter.begin(resources.len());

        let parse_result = Arc::new(parse_result.clone());
        let mut tasks: Vec<JoinHandle<ResourceReport>> = Vec::new();
        for resource_url in resources {
            let client = self.client.clone();
            let agent = self.config.agent().to_string();
            let parse_result = Arc::clone(&parse_result);
            let resource_url = resource_url.clone();
            let progress_reporter = progress_reporter.clone();
            tasks.push(tokio::task::spawn(async move {
                let report = Self::check_one(&client, &parse_result, &agent, resource_url).await;
                progress_reporter.resource_checked(&report);
                report
            }));
        }

        let all_tasks = join_all(tasks);
        let mut reports: Vec<ResourceReport> = Vec::new();
        select! {
            results = all_tasks => {
                for result in results {
                    match result {
                        Ok(report) => reports.push(report),
                        Err(e) => log::warn!("resource check task failed: {e}"),
                    }
                }
            }
            _ = shutdown_notify.notified() => {
                log::warn!("shutdown requested, abandoning remaining resource checks");
            }
        }

        progress_reporter.end();
        Ok(reports)
    }

    async fn check_one(
        client: &reqwest::Client,
        parse_result: &ParseResult,
        agent: &str,
        resource_url: Url,
    ) -> ResourceReport {
        let verdict = match robots::evaluate(parse_result, agent, resource_url.path()) {
            Ok(verdict) => verdict,
            Err(e) => return ResourceReport::evaluate_failed(resource_url, e.to_string()),
        };

        match client.get(resource_url.clone()).send().await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let resource_kind = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(ResourceKind::from_content_type)
                    .unwrap_or(ResourceKind::Other);
                ResourceReport::new(resource_url, status_code, resource_kind, verdict)
            }
            Err(e) => {
                log::debug!("fetch failed for {resource_url}: {e}");
                ResourceReport::fetch_failed(resource_url, verdict, e.to_string())
            }
        }
    }
}
