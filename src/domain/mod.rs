// ============================================================================
// Domain Module
// Constant tables and result-bundle data types
// ============================================================================

pub mod constants;
pub mod report;

pub use constants::PhysicalConstant;
pub use report::{ComparisonResult, DriftAnalysis, TheoreticalValues, VerificationReport};
