// ============================================================================
// Verification Report Example
// ============================================================================

use constants_verifier::prelude::*;

/// Fixed-point rendering for the drift and sigma fields.
///
/// Rounds to a display precision first so the value fits
/// `rust_decimal`'s scale range, then lets `round_dp` pick the places.
fn fixed(value: &FloatingDecimal, places: u32) -> String {
    let ctx = PrecisionContext::with_precision(places + 6).expect("display context");
    value
        .checked_mul(&FloatingDecimal::one(), &ctx)
        .expect("display rounding")
        .to_decimal()
        .expect("display conversion")
        .round_dp(places)
        .to_string()
}

fn print_comparison(record: &ComparisonResult) {
    println!("\n[{}]", record.label);
    println!("  Ref Value   : {}", record.reference.to_scientific_string(12));
    println!("  Theory Val  : {}", record.theoretical.to_scientific_string(12));
    println!("  Relative Err: {}%", fixed(&record.relative_drift_pct, 10));
    if let Some(sigma) = &record.sigma_distance {
        println!("  Sigma Dist  : {} sigma", fixed(sigma, 4));
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    let verifier = ConstantsVerifier::new(PrecisionContext::default());
    let report = verifier.run().expect("verification run");

    println!("=== Constant Verification ===");
    println!("generated at {}", report.generated_at);
    println!(
        "\nTheoretical G: {}",
        report.theoretical.g_theory.to_scientific_string(16)
    );

    for record in &report.comparisons {
        print_comparison(record);
    }

    println!("\n[{}]", report.planck.label);
    println!(
        "  Ref Value   : {}",
        report.planck.reference.to_scientific_string(16)
    );
    println!(
        "  Theory Val  : {}",
        report.planck.theoretical.to_scientific_string(16)
    );
    println!(
        "  Relative Err: {} %",
        fixed(&report.planck.relative_drift_pct, 10)
    );

    println!("\n[Systematic Drift vs CODATA 2022]");
    println!("  G Drift     : {}%", fixed(&report.drift.drift_a_pct, 8));
    println!("  Alpha Drift : {}%", fixed(&report.drift.drift_b_pct, 8));
    println!(
        "  Sync Gap    : {}%",
        fixed(&report.drift.synchronization_gap_pct, 8)
    );
}
