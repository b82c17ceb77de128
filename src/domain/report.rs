// ============================================================================
// Verification Report
// Structured result bundle handed to the presentation layer
// ============================================================================

use crate::numeric::FloatingDecimal;
use chrono::{DateTime, Utc};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Theoretical constants produced by the closed-form chain.
///
/// `epi` and `e64` are intermediates of the derivation, exposed because
/// downstream reporting references them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TheoreticalValues {
    /// Theoretical gravitational constant
    pub g_theory: FloatingDecimal,
    /// Theoretical Planck constant
    pub h_theory: FloatingDecimal,
    /// Theoretical inverse fine-structure constant
    pub alpha_inv_theory: FloatingDecimal,
    /// exp(-1/(4π² - 1))
    pub epi: FloatingDecimal,
    /// exp(-1/64)
    pub e64: FloatingDecimal,
}

/// Outcome of comparing one theoretical value against one reference datum.
///
/// Derived and stateless: recomputed on demand from theory, reference and
/// sigma. `sigma_distance` is `None` for references that publish no
/// uncertainty (the 2022 Planck constant is exact by definition).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonResult {
    /// Which reference datum this record compares against
    pub label: String,
    /// Reference value
    pub reference: FloatingDecimal,
    /// Theoretical value
    pub theoretical: FloatingDecimal,
    /// |theoretical - reference|
    pub absolute_difference: FloatingDecimal,
    /// (|theoretical - reference| / reference) · 100
    pub relative_drift_pct: FloatingDecimal,
    /// |theoretical - reference| / sigma, when a sigma is published
    pub sigma_distance: Option<FloatingDecimal>,
}

/// Relative drifts of two theoretical quantities against the same reference
/// epoch, and the absolute difference between them (the synchronization gap).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriftAnalysis {
    /// Relative drift of the first quantity, percent
    pub drift_a_pct: FloatingDecimal,
    /// Relative drift of the second quantity, percent
    pub drift_b_pct: FloatingDecimal,
    /// |drift_a_pct - drift_b_pct|
    pub synchronization_gap_pct: FloatingDecimal,
}

/// Complete verification run output.
///
/// The core computes this bundle; presentation renders it with caller-chosen
/// display precision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VerificationReport {
    /// When the run completed
    pub generated_at: DateTime<Utc>,
    /// The computed theoretical constants
    pub theoretical: TheoreticalValues,
    /// Sigma comparisons: three G epochs plus the inverse fine-structure
    /// constant
    pub comparisons: SmallVec<[ComparisonResult; 4]>,
    /// Planck-constant comparison (no published sigma)
    pub planck: ComparisonResult,
    /// Systematic drift of G vs 1/alpha against the 2022 epoch
    pub drift: DriftAnalysis,
}
