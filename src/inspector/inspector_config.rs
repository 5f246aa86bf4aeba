use std::time::Duration;

#[derive(Clone)]
pub struct InspectorConfig {
    agent: String,
    request_timeout: Duration,
    discover_resources: bool,
}

impl InspectorConfig {
    pub fn new(agent: String, request_timeout: Duration, discover_resources: bool) -> Self {
        Self {
            agent,
            request_timeout,
            discover_resources,
        }
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn discover_resources(&self) -> bool {
        self.discover_resources
    }
}
