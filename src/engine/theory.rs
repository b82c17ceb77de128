// ============================================================================
// Theory Engine
// Closed-form derivation of theoretical G, h and 1/alpha
// ============================================================================

use crate::domain::constants;
use crate::domain::TheoreticalValues;
use crate::numeric::{exponential, FloatingDecimal, NumericResult, PrecisionContext};

/// Deterministic evaluator for the closed-form constant derivation.
///
/// The chain is a pure function of two literal inputs, the speed of light
/// and π, evaluated at the engine's precision context:
///
/// 1. c³ and c⁴
/// 2. 4π² - 1 and its inverse
/// 3. exp(1), exp(-1/64), exp(-1/(4π² - 1))
/// 4. hA = 2e/c⁴, h = hA·exp(-1/64)
/// 5. G = 0.25·c³ · (hA - h) · exp(-1/(4π² - 1))²
/// 6. 1/alpha = (32π·4/3) / exp(-1/(4π² - 1)) - 0.5
///
/// Identical contexts produce bit-identical results.
pub struct TheoryEngine {
    ctx: PrecisionContext,
}

impl TheoryEngine {
    /// Create an engine bound to a precision context.
    pub fn new(ctx: PrecisionContext) -> Self {
        Self { ctx }
    }

    /// The context this engine computes under.
    pub fn context(&self) -> &PrecisionContext {
        &self.ctx
    }

    /// Evaluate the full derivation chain.
    ///
    /// # Errors
    /// Propagates numeric failures from the underlying arithmetic; with the
    /// default context the chain cannot fail.
    pub fn compute(&self) -> NumericResult<TheoreticalValues> {
        let ctx = &self.ctx;
        let one = FloatingDecimal::one();
        let neg_one = FloatingDecimal::from_integer(-1);
        let half = "0.5".parse::<FloatingDecimal>()?;

        let c = constants::SPEED_OF_LIGHT.value()?;
        let pi = constants::PI.value()?;

        let c3 = c.checked_mul(&c, ctx)?.checked_mul(&c, ctx)?;
        let c4 = c3.checked_mul(&c, ctx)?;

        let pi_sq = pi.checked_mul(&pi, ctx)?;
        let four = FloatingDecimal::from_integer(4);
        let term_pi = four.checked_mul(&pi_sq, ctx)?.checked_sub(&one, ctx)?;
        let inv_term_pi = one.checked_div(&term_pi, ctx)?;

        let e_val = exponential::exp(&one, ctx)?;
        let sixty_fourth = neg_one.checked_div(&FloatingDecimal::from_integer(64), ctx)?;
        let e64 = exponential::exp(&sixty_fourth, ctx)?;
        let epi_arg = neg_one.checked_mul(&inv_term_pi, ctx)?;
        let epi = exponential::exp(&epi_arg, ctx)?;

        let h_a = FloatingDecimal::from_integer(2)
            .checked_mul(&e_val, ctx)?
            .checked_div(&c4, ctx)?;
        let h_theory = h_a.checked_mul(&e64, ctx)?;

        let factor = "0.25".parse::<FloatingDecimal>()?.checked_mul(&c3, ctx)?;
        let diff_h = h_a.checked_sub(&h_theory, ctx)?;
        let epi_sq = epi.checked_mul(&epi, ctx)?;
        let g_theory = factor
            .checked_mul(&diff_h, ctx)?
            .checked_mul(&epi_sq, ctx)?;

        let a_normal = half.checked_mul(&FloatingDecimal::from_integer(64), ctx)?;
        let a_space = a_normal
            .checked_mul(&pi, ctx)?
            .checked_mul(&four, ctx)?
            .checked_div(&FloatingDecimal::from_integer(3), ctx)?;
        let alpha_inv_theory = a_space.checked_div(&epi, ctx)?.checked_sub(&half, ctx)?;

        tracing::debug!(
            "theoretical constants computed: G={}, h={}, 1/alpha={}",
            g_theory,
            h_theory,
            alpha_inv_theory
        );

        Ok(TheoreticalValues {
            g_theory,
            h_theory,
            alpha_inv_theory,
            epi,
            e64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute() -> TheoreticalValues {
        TheoryEngine::new(PrecisionContext::default())
            .compute()
            .unwrap()
    }

    fn dec(s: &str) -> FloatingDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_canonical_g_regression() {
        // canonical regression value of the derivation chain
        let values = compute();
        let drift = values
            .g_theory
            .checked_sub(&dec("6.6727e-11"), &PrecisionContext::default())
            .unwrap()
            .abs();
        assert!(drift < dec("1e-14"), "G_theory drifted by {}", drift);
    }

    #[test]
    fn test_full_precision_digits() {
        // every stored digit of the chain output, at the default 34-digit
        // context
        let values = compute();
        assert_eq!(
            values.g_theory.to_string(),
            "6.672704537072403550838721379233071E-11"
        );
        assert_eq!(
            values.h_theory.to_string(),
            "6.626066871911807556881439831885833E-34"
        );
        assert_eq!(
            values.alpha_inv_theory.to_string(),
            "1.370704921345480020134042735545305E+02"
        );
        assert_eq!(
            values.epi.to_string(),
            "9.743462022514841098733146892425572E-01"
        );
        assert_eq!(
            values.e64.to_string(),
            "9.844964370054084059869888296970204E-01"
        );
    }

    #[test]
    fn test_deterministic_across_runs() {
        let first = compute();
        let second = compute();
        assert_eq!(first, second);
        assert_eq!(first.g_theory.to_string(), second.g_theory.to_string());
    }

    #[test]
    fn test_h_close_to_codata() {
        let values = compute();
        let h_ref = constants::H_CODATA_2022.value().unwrap();
        let diff = values
            .h_theory
            .checked_sub(&h_ref, &PrecisionContext::default())
            .unwrap()
            .abs();
        assert!(diff < dec("1e-38"));
    }

    #[test]
    fn test_intermediates_in_unit_interval() {
        let values = compute();
        let one = FloatingDecimal::one();
        assert!(values.epi < one && values.epi.is_positive());
        assert!(values.e64 < one && values.e64.is_positive());
    }
}
