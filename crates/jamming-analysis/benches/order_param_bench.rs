// ─────────────────────────────────────────────────────────────────────
// Jamming Kernel — Order-Parameter Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for order-parameter extraction at the default
//! and near-critical simulation horizons.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use jamming_analysis::{history_to_op, sweep};
use jamming_types::AnalysisParams;

fn noisy_history(len: usize) -> Vec<f64> {
    (0..len)
        .map(|t| 3.0 * t as f64 + if t % 7 == 0 { -2.0 } else { 0.0 })
        .collect()
}

// ── history_to_op() ─────────────────────────────────────────────────

fn bench_history_to_op_10k(c: &mut Criterion) {
    let raw = noisy_history(10_000);
    let param = AnalysisParams::default();
    c.bench_function("history_to_op_10k", |b| {
        b.iter(|| history_to_op(black_box(&raw), &param))
    });
}

fn bench_history_to_op_100k(c: &mut Criterion) {
    let raw = noisy_history(100_000);
    let param = AnalysisParams::default().for_packet(100);
    c.bench_function("history_to_op_100k", |b| {
        b.iter(|| history_to_op(black_box(&raw), &param))
    });
}

// ── sweep() ─────────────────────────────────────────────────────────

fn bench_sweep_near_critical(c: &mut Criterion) {
    let base = AnalysisParams::default();
    let histories: Vec<(u32, Vec<f64>)> = base
        .near_critical_packets()
        .into_iter()
        .map(|p| (p, noisy_history(10_000)))
        .collect();
    c.bench_function("sweep_near_critical", |b| {
        b.iter(|| sweep(black_box(histories.iter().map(|(p, h)| (*p, h))), &base))
    });
}

criterion_group!(
    benches,
    bench_history_to_op_10k,
    bench_history_to_op_100k,
    bench_sweep_near_critical,
);
criterion_main!(benches);
