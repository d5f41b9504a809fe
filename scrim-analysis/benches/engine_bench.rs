//! Criterion benchmark harness for the decision engine.
//!
//! Measures the full route path (resolve → filter → mine → map →
//! truncate) over synthetic fact pools of increasing size, plus the
//! per-focus spread on a fixed pool.
//!
//! Run with: `cargo bench -p scrim-analysis --bench engine_bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use scrim_analysis::DecisionEngine;
use scrim_core::facts::kinds;
use scrim_core::{ContextCompleteness, Fact};

// ---------------------------------------------------------------------------
// Fixture setup (outside the timed region)
// ---------------------------------------------------------------------------

fn synthetic_pool(size: usize, seed: u64) -> Vec<Fact> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..size)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let kind = kinds::ALL[(state >> 33) as usize % kinds::ALL.len()];
            let start = (state % 24) as u32 + 1;
            Fact::new(kind)
                .with_game(state % 3)
                .with_rounds(start, start + (state % 4) as u32)
                .with_note(format!("synthetic fact {i}"))
        })
        .collect()
}

fn complete_context() -> ContextCompleteness {
    ContextCompleteness::new(true, 64, true)
}

// ---------------------------------------------------------------------------
// Full route path over growing pools
// ---------------------------------------------------------------------------

fn bench_route_pool_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");
    let engine = DecisionEngine::with_defaults();
    let context = complete_context();

    for &(size, label) in &[
        (10usize, "small_10facts"),
        (100, "medium_100facts"),
        (1_000, "large_1Kfacts"),
        (10_000, "xlarge_10Kfacts"),
    ] {
        let pool = synthetic_pool(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("risk_assessment", label), &pool, |b, pool| {
            b.iter(|| engine.route("RISK_ASSESSMENT", pool, &context));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Per-focus spread on a fixed pool
// ---------------------------------------------------------------------------

fn bench_route_per_intent(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_intents");
    let engine = DecisionEngine::with_defaults();
    let context = complete_context();
    let pool = synthetic_pool(200, 42);

    for intent in &[
        "ECONOMIC_COUNTERFACTUAL",
        "RISK_ASSESSMENT",
        "MAP_WEAK_POINT",
        "PLAYER_REVIEW",
        "MATCH_SUMMARY",
        "MOMENTUM_ANALYSIS",
        "UNMAPPED_QUESTION",
    ] {
        group.bench_with_input(BenchmarkId::new("intent", intent), &pool, |b, pool| {
            b.iter(|| engine.route(intent, pool, &context));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Multi-intent fan-out
// ---------------------------------------------------------------------------

fn bench_route_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("route_many");
    let engine = DecisionEngine::with_defaults();
    let context = complete_context();
    let pool = synthetic_pool(500, 42);
    let intents = ["RISK_ASSESSMENT", "MOMENTUM_ANALYSIS", "MATCH_SUMMARY"];

    group.throughput(Throughput::Elements(intents.len() as u64));
    group.bench_with_input(BenchmarkId::new("fan_out", "three_intents"), &pool, |b, pool| {
        b.iter(|| engine.route_many(&intents, pool, &context));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_route_pool_sizes,
    bench_route_per_intent,
    bench_route_many,
);
criterion_main!(benches);
