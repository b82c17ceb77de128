// ============================================================================
// Constants Verifier
// Orchestrates theory evaluation, reference comparisons and drift analysis
// ============================================================================

use super::comparison::{compare, systematic_drift};
use super::theory::TheoryEngine;
use crate::domain::constants;
use crate::domain::VerificationReport;
use crate::interfaces::ReportSink;
use crate::numeric::{NumericResult, PrecisionContext};
use chrono::Utc;
use smallvec::SmallVec;

/// Full verification pipeline.
///
/// Runs the theory engine, compares each theoretical value against the
/// compiled-in reference datasets, performs the G-vs-1/alpha systematic
/// drift analysis against the 2022 epoch, and bundles everything into a
/// [`VerificationReport`].
pub struct ConstantsVerifier {
    theory: TheoryEngine,
}

impl ConstantsVerifier {
    /// Create a verifier bound to a precision context.
    pub fn new(ctx: PrecisionContext) -> Self {
        Self {
            theory: TheoryEngine::new(ctx),
        }
    }

    /// Run the full pipeline and produce the report bundle.
    ///
    /// # Errors
    /// Propagates numeric failures; with the default context and the
    /// compiled-in table the pipeline cannot fail.
    pub fn run(&self) -> NumericResult<VerificationReport> {
        let ctx = self.theory.context();
        let theoretical = self.theory.compute()?;

        let mut comparisons = SmallVec::new();
        for epoch in &constants::G_EPOCHS {
            let reference = epoch.value()?;
            let sigma = epoch.sigma()?;
            comparisons.push(compare(
                epoch.label(),
                &theoretical.g_theory,
                &reference,
                sigma.as_ref(),
                ctx,
            )?);
        }

        let alpha_ref = constants::ALPHA_INV_CODATA_2022.value()?;
        let alpha_sigma = constants::ALPHA_INV_CODATA_2022.sigma()?;
        comparisons.push(compare(
            constants::ALPHA_INV_CODATA_2022.label(),
            &theoretical.alpha_inv_theory,
            &alpha_ref,
            alpha_sigma.as_ref(),
            ctx,
        )?);

        let h_ref = constants::H_CODATA_2022.value()?;
        let planck = compare(
            constants::H_CODATA_2022.label(),
            &theoretical.h_theory,
            &h_ref,
            None,
            ctx,
        )?;

        let g_2022 = constants::G_CODATA_2022.value()?;
        let drift = systematic_drift(
            &theoretical.g_theory,
            &g_2022,
            &theoretical.alpha_inv_theory,
            &alpha_ref,
            ctx,
        )?;

        tracing::debug!(
            "verification run complete: {} sigma comparisons, gap {}",
            comparisons.len(),
            drift.synchronization_gap_pct
        );

        Ok(VerificationReport {
            generated_at: Utc::now(),
            theoretical,
            comparisons,
            planck,
            drift,
        })
    }

    /// Run the pipeline and hand the report to a sink.
    ///
    /// # Errors
    /// Same as [`ConstantsVerifier::run`]; the sink only sees successful runs.
    pub fn run_into(&self, sink: &dyn ReportSink) -> NumericResult<VerificationReport> {
        let report = self.run()?;
        sink.on_report(&report);
        Ok(report)
    }
}
