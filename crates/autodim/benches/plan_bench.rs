//! Criterion benchmarks for the grid and room planners on sampled layouts.
//! Focus sizes: square layouts with {5, 20, 50} grid lines per direction.

use autodim::dimension::{plan_grids, plan_rooms, DimCfg};
use autodim::layout::{sample_model, LayoutCfg, ReplayToken};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_plans(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan");
    let dim = DimCfg::default();
    for &n in &[5usize, 20, 50] {
        let cfg = LayoutCfg {
            columns: n,
            rows: n,
            ..LayoutCfg::default()
        };
        let model = sample_model(cfg, ReplayToken { seed: 2025, index: n as u64 }).unwrap();
        group.bench_with_input(BenchmarkId::new("grids", n), &model, |b, m| {
            b.iter(|| plan_grids(&m.grids, &dim).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("rooms", n), &model, |b, m| {
            b.iter(|| plan_rooms(&m.rooms, &dim).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plans);
criterion_main!(benches);
