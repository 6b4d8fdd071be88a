//! Criterion benchmarks for disagg-engine.
//!
//! A synthetic forecast of 200 sources x 50 ruptures over a 10x10x8x8 grid,
//! run sequentially and on the rayon pool.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use disagg_core::traits::GroundMotionRegistry;
use disagg_core::types::{Location, Rupture, Site, TectonicRegion};
use disagg_engine::{classify, BinSpecification, DisaggregationEngine, EngineOptions, TabulatedHazardCurve};
use disagg_fixtures::{AttenuationModel, InMemoryForecast, InMemorySource};

fn grid(low: f64, high: f64, bins: usize) -> Vec<f64> {
    let step = (high - low) / bins as f64;
    (0..=bins).map(|i| low + step * i as f64).collect()
}

fn bench_bins() -> BinSpecification {
    BinSpecification::new(
        grid(-1.0, 1.0, 10),
        grid(-1.0, 1.0, 10),
        grid(5.0, 8.0, 8),
        grid(-4.0, 4.0, 8),
        grid(0.0, 300.0, 6),
    )
    .unwrap()
}

fn bench_forecast(sources: usize, ruptures: usize) -> InMemoryForecast {
    (0..sources).fold(InMemoryForecast::new(5.0), |forecast, s| {
        let region = TectonicRegion::ALL[s % 2];
        let lat = -0.9 + 1.8 * (s as f64 * 0.618).fract();
        let lon = -0.9 + 1.8 * (s as f64 * 0.382).fract();
        let ruptures = (0..ruptures)
            .map(|r| {
                let trace = (0..4)
                    .map(|k| Location::new(lat + 0.01 * k as f64, lon + 0.01 * k as f64, k as f64))
                    .collect();
                Rupture::new(5.0 + 2.9 * r as f64 / ruptures as f64, 1e-4, trace)
            })
            .collect();
        forecast.with_source(InMemorySource::new(region, ruptures))
    })
}

fn bench_registry() -> GroundMotionRegistry {
    let model = Arc::new(AttenuationModel::default());
    GroundMotionRegistry::new()
        .with(TectonicRegion::ActiveShallow, model.clone())
        .with(TectonicRegion::StableShallow, model)
}

fn bench_compute(c: &mut Criterion) {
    let site = Site::new(Location::surface(0.0, 0.0));
    let forecast = bench_forecast(200, 50);
    let registry = bench_registry();
    let curve = TabulatedHazardCurve::new(vec![0.01, 0.1, 1.0], vec![0.3, 0.02, 0.0005]).unwrap();

    let mut group = c.benchmark_group("compute");
    for (name, options) in [
        ("sequential", EngineOptions::raw()),
        ("parallel", EngineOptions::raw().with_parallel(true)),
    ] {
        let engine = DisaggregationEngine::new(bench_bins(), options);
        group.bench_with_input(BenchmarkId::new("10k_ruptures", name), &engine, |b, engine| {
            b.iter(|| {
                engine
                    .compute(&site, &forecast, &registry, 0.01, &curve)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let edges = grid(-4.0, 4.0, 64);
    c.bench_function("classify_64_bins", |b| {
        b.iter(|| classify(&edges, std::hint::black_box(1.37)).unwrap())
    });
}

criterion_group!(benches, bench_compute, bench_classify);
criterion_main!(benches);
