// ============================================================================
// Comparison Engine
// Theory-vs-reference statistics: absolute difference, drift, sigma distance
// ============================================================================

use crate::domain::{ComparisonResult, DriftAnalysis};
use crate::numeric::{FloatingDecimal, NumericError, NumericResult, PrecisionContext};

/// (|theory - reference| / reference) · 100
fn relative_drift_pct(
    theory: &FloatingDecimal,
    reference: &FloatingDecimal,
    ctx: &PrecisionContext,
) -> NumericResult<FloatingDecimal> {
    if reference.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let hundred = FloatingDecimal::from_integer(100);
    theory
        .checked_sub(reference, ctx)?
        .abs()
        .checked_div(reference, ctx)?
        .checked_mul(&hundred, ctx)
}

/// Compare a theoretical value against a reference datum.
///
/// Computes the absolute difference, the relative drift in percent, and,
/// when an uncertainty is given, the sigma distance |theory - ref| / sigma.
/// No tolerance logic is applied beyond the context's own rounding.
///
/// # Errors
/// `DivisionByZero` if `reference` or a supplied `sigma` is exactly zero.
/// A zero denominator signals a malformed reference table, which the engine
/// cannot meaningfully continue past.
pub fn compare(
    label: impl Into<String>,
    theory: &FloatingDecimal,
    reference: &FloatingDecimal,
    sigma: Option<&FloatingDecimal>,
    ctx: &PrecisionContext,
) -> NumericResult<ComparisonResult> {
    if reference.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    if let Some(sigma) = sigma {
        if sigma.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
    }
    let absolute_difference = theory.checked_sub(reference, ctx)?.abs();
    let relative_drift_pct = relative_drift_pct(theory, reference, ctx)?;
    let sigma_distance = sigma
        .map(|sigma| absolute_difference.checked_div(sigma, ctx))
        .transpose()?;
    Ok(ComparisonResult {
        label: label.into(),
        reference: reference.clone(),
        theoretical: theory.clone(),
        absolute_difference,
        relative_drift_pct,
        sigma_distance,
    })
}

/// Drift consistency of two theoretical quantities against one epoch.
///
/// Computes the two independent relative drifts and their absolute
/// difference, the synchronization gap.
///
/// # Errors
/// `DivisionByZero` if either reference is exactly zero.
pub fn systematic_drift(
    theory_a: &FloatingDecimal,
    ref_a: &FloatingDecimal,
    theory_b: &FloatingDecimal,
    ref_b: &FloatingDecimal,
    ctx: &PrecisionContext,
) -> NumericResult<DriftAnalysis> {
    let drift_a_pct = relative_drift_pct(theory_a, ref_a, ctx)?;
    let drift_b_pct = relative_drift_pct(theory_b, ref_b, ctx)?;
    let synchronization_gap_pct = drift_a_pct.checked_sub(&drift_b_pct, ctx)?.abs();
    Ok(DriftAnalysis {
        drift_a_pct,
        drift_b_pct,
        synchronization_gap_pct,
    })
}
