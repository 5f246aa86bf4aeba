mod check_progress_printer;
mod report_printer;

pub use check_progress_printer::CheckProgressPrinter;
pub use report_printer::ReportPrinter;
