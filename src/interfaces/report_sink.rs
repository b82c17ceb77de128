// ============================================================================
// Report Sink Interface
// Defines the contract for consuming verification reports
// ============================================================================

use crate::domain::VerificationReport;

/// Consumer of completed verification reports.
/// Implementations can handle rendering, logging, serialization, etc. The
/// core never formats text itself; it hands the structured bundle to a sink.
pub trait ReportSink {
    /// Handle a completed report
    fn on_report(&self, report: &VerificationReport);
}

/// No-op sink for testing
pub struct NoOpReportSink;

impl ReportSink for NoOpReportSink {
    fn on_report(&self, _report: &VerificationReport) {
        // Do nothing
    }
}

/// Logging sink
pub struct LoggingReportSink;

impl ReportSink for LoggingReportSink {
    fn on_report(&self, report: &VerificationReport) {
        tracing::debug!("verification report: {:?}", report);
    }
}
