// ============================================================================
// Series Exponential
// Truncated Taylor series e^x at context precision
// ============================================================================

use super::context::PrecisionContext;
use super::errors::NumericResult;
use super::floating_decimal::FloatingDecimal;

/// Number of series iterations beyond the constant term.
///
/// Fixed design parameter: 31 terms (k = 0..=30) give full-precision
/// convergence over the |x| ≤ 1 range this engine actually evaluates. The
/// truncation error for |x| ≤ 1 is bounded by the first dropped term,
/// e/31! ≈ 3·10⁻³⁴, which the context's guard digits absorb.
pub const SERIES_TERMS: u32 = 30;

/// Compute e^x as a truncated Taylor series Σ x^k / k!, k = 0..=30.
///
/// Terms accumulate iteratively (term ← term·x/k, sum ← sum + term) at the
/// context's working precision. This is not an adaptive series: callers are
/// responsible for keeping |x| inside the validated range; no error is
/// raised for large |x|, the result simply stops converging.
///
/// # Errors
/// Propagates `Overflow`/`Underflow` from the underlying arithmetic.
pub fn exp(x: &FloatingDecimal, ctx: &PrecisionContext) -> NumericResult<FloatingDecimal> {
    let mut sum = FloatingDecimal::one();
    let mut term = FloatingDecimal::one();
    for k in 1..=SERIES_TERMS {
        let divisor = FloatingDecimal::from_integer(i64::from(k));
        term = term.checked_mul(x, ctx)?.checked_div(&divisor, ctx)?;
        sum = sum.checked_add(&term, ctx)?;
    }
    Ok(sum)
}
