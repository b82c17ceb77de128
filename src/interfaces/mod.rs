// ============================================================================
// Interfaces Module
// Seams between the core engine and external collaborators
// ============================================================================

mod report_sink;

pub use report_sink::{LoggingReportSink, NoOpReportSink, ReportSink};
