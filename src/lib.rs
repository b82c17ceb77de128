// ============================================================================
// Constants Verifier Library
// High-precision verification of theoretical physical constants
// ============================================================================

//! # Constants Verifier
//!
//! A high-precision decimal engine that derives theoretical values for the
//! gravitational constant G, the Planck constant h and the inverse
//! fine-structure constant 1/alpha from a closed-form expression, then
//! reports how each value sits against historical CODATA reference datasets.
//!
//! ## Features
//!
//! - **Arbitrary-precision decimal arithmetic** with context-controlled
//!   rounding (34 significant digits by default: 32 target + 2 guard)
//! - **Round-half-to-even** on every operation, exact value comparison
//! - **Truncated Taylor-series exponential** validated for |x| ≤ 1
//! - **Structured comparison records**: absolute difference, relative drift
//!   and sigma distance per reference epoch
//! - **Bit-for-bit reproducible**: identical contexts give identical digits
//!
//! ## Example
//!
//! ```rust
//! use constants_verifier::prelude::*;
//!
//! let verifier = ConstantsVerifier::new(PrecisionContext::default());
//! let report = verifier.run().unwrap();
//!
//! println!("G_theory = {}", report.theoretical.g_theory.to_scientific_string(16));
//! for record in &report.comparisons {
//!     println!(
//!         "{}: drift {} %",
//!         record.label,
//!         record.relative_drift_pct.to_scientific_string(10)
//!     );
//! }
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ComparisonResult, DriftAnalysis, PhysicalConstant, TheoreticalValues, VerificationReport,
    };
    pub use crate::engine::{compare, systematic_drift, ConstantsVerifier, TheoryEngine};
    pub use crate::interfaces::{LoggingReportSink, NoOpReportSink, ReportSink};
    pub use crate::numeric::{FloatingDecimal, NumericError, NumericResult, PrecisionContext};
}
