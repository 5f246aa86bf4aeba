use crate::inspector::resource_report::ResourceReport;

/// Seam between the resource-checking loop and whatever renders progress.
pub trait ProgressReporter {
    fn begin(&self, num_resources: usize);
    fn resource_checked(&self, report: &ResourceReport);
    fn end(&self);
}
