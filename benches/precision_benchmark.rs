// ============================================================================
// Precision Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Floating Decimal - isolated arithmetic primitives at 34 digits
// 2. Series Exponential - the 31-term Taylor accumulation
// 3. Full Chain - end-to-end theory evaluation and verification run
// ============================================================================

use constants_verifier::engine::{ConstantsVerifier, TheoryEngine};
use constants_verifier::numeric::{exponential, FloatingDecimal, PrecisionContext};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// ============================================================================
// Floating Decimal Benchmarks
// ============================================================================

fn benchmark_floating_decimal(c: &mut Criterion) {
    let ctx = PrecisionContext::default();
    let a: FloatingDecimal = "2.718281828459045235360287471352662"
        .parse()
        .unwrap();
    let b: FloatingDecimal = "3.1415926535897932384626433832795028841971693993751"
        .parse()
        .unwrap();

    let mut group = c.benchmark_group("floating_decimal");
    group.bench_function("add", |bench| {
        bench.iter(|| black_box(&a).checked_add(black_box(&b), &ctx).unwrap())
    });
    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(&a).checked_mul(black_box(&b), &ctx).unwrap())
    });
    group.bench_function("div", |bench| {
        bench.iter(|| black_box(&a).checked_div(black_box(&b), &ctx).unwrap())
    });
    group.finish();
}

// ============================================================================
// Series Exponential Benchmarks
// ============================================================================

fn benchmark_exponential(c: &mut Criterion) {
    let ctx = PrecisionContext::default();
    let one = FloatingDecimal::one();
    let small: FloatingDecimal = "-0.015625".parse().unwrap();

    let mut group = c.benchmark_group("exponential");
    group.bench_function("exp_one", |bench| {
        bench.iter(|| exponential::exp(black_box(&one), &ctx).unwrap())
    });
    group.bench_function("exp_small", |bench| {
        bench.iter(|| exponential::exp(black_box(&small), &ctx).unwrap())
    });
    group.finish();
}

// ============================================================================
// Full Chain Benchmarks
// ============================================================================

fn benchmark_full_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_chain");
    group.bench_function("theory_compute", |bench| {
        let engine = TheoryEngine::new(PrecisionContext::default());
        bench.iter(|| engine.compute().unwrap())
    });
    group.bench_function("verification_run", |bench| {
        let verifier = ConstantsVerifier::new(PrecisionContext::default());
        bench.iter(|| verifier.run().unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_floating_decimal,
    benchmark_exponential,
    benchmark_full_chain
);
criterion_main!(benches);
