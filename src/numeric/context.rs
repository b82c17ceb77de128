// ============================================================================
// Precision Context
// Process-wide precision and exponent-range configuration
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Working precision and exponent bounds for decimal arithmetic.
///
/// A context is established once, before any arithmetic occurs, and stays
/// unchanged for the lifetime of the computation. Every arithmetic result is
/// rounded to `precision` significant digits; results whose adjusted exponent
/// falls outside `[emin, emax]` fail with `Overflow`/`Underflow`.
///
/// The default context carries 34 significant digits (32 target digits plus
/// 2 guard digits to absorb rounding-error accumulation) and exponent bounds
/// of ±999 999, wide enough that intermediate products such as c³ and c⁴
/// never trip a spurious range failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionContext {
    precision: u32,
    emin: i64,
    emax: i64,
}

impl PrecisionContext {
    /// Default working precision: 32 target digits + 2 guard digits.
    pub const DEFAULT_PRECISION: u32 = 34;

    /// Default smallest allowed adjusted exponent.
    pub const DEFAULT_EMIN: i64 = -999_999;

    /// Default largest allowed adjusted exponent.
    pub const DEFAULT_EMAX: i64 = 999_999;

    /// Create a validated context.
    ///
    /// # Errors
    /// - `InvalidPrecision` if `precision` is zero
    /// - `InvalidExponentRange` unless `emin <= 0 <= emax`
    pub fn new(precision: u32, emin: i64, emax: i64) -> NumericResult<Self> {
        if precision == 0 {
            return Err(NumericError::InvalidPrecision);
        }
        if emin > 0 || emax < 0 {
            return Err(NumericError::InvalidExponentRange);
        }
        Ok(Self {
            precision,
            emin,
            emax,
        })
    }

    /// Context with a custom precision and the default exponent bounds.
    pub fn with_precision(precision: u32) -> NumericResult<Self> {
        Self::new(precision, Self::DEFAULT_EMIN, Self::DEFAULT_EMAX)
    }

    /// Significant digits carried by every arithmetic result.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Smallest allowed adjusted exponent.
    #[inline]
    pub const fn emin(&self) -> i64 {
        self.emin
    }

    /// Largest allowed adjusted exponent.
    #[inline]
    pub const fn emax(&self) -> i64 {
        self.emax
    }
}

impl Default for PrecisionContext {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            emin: Self::DEFAULT_EMIN,
            emax: Self::DEFAULT_EMAX,
        }
    }
}
