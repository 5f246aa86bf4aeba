mod inspect_error;
mod inspection_report;
mod inspector_config;
mod progress_reporter;
mod resource_checker;
mod resource_discoverer;
mod resource_kind;
mod resource_report;
mod robots_txt_source;

pub use inspect_error::InspectError;
pub use inspection_report::{InspectionReport, PathVerdict};
pub use inspector_config::InspectorConfig;
pub use progress_reporter::ProgressReporter;
pub use resource_checker::ResourceChecker;
pub use resource_discoverer::ResourceDiscoverer;
pub use resource_kind::ResourceKind;
pub use resource_report::ResourceReport;
pub use robots_txt_source::RobotsTxtSource;
