//! Benchmarks for quantile extraction and figure construction.
//!
//! Run with: cargo bench --bench render_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::{Array2, Array3};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use fancast::prelude::*;

fn synthetic_pair(dims: usize, num_samples: usize) -> (MultivariateSeries, SampleForecast) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let timesteps = 100;
    let horizon = 24;

    let index = TimeIndex::new("2011-01-01 00:00", Frequency::Hourly, timesteps);
    let values = Array2::from_shape_fn((timesteps, dims), |_| rng.gen::<f64>());
    let target = MultivariateSeries::new(index.clone(), values).unwrap();

    let samples = Array3::from_shape_fn((num_samples, horizon, dims), |_| rng.gen::<f64>());
    let forecast = SampleForecast::new(samples, index.tail(horizon).unwrap()).unwrap();
    (target, forecast)
}

fn bench_quantile_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile_queries");

    for num_samples in [100, 500].iter() {
        let (_, forecast) = synthetic_pair(16, *num_samples);
        group.bench_with_input(
            BenchmarkId::new("empirical_quantile", num_samples),
            num_samples,
            |b, _| {
                b.iter(|| {
                    for q in [0.05, 0.25, 0.5, 0.75, 0.95] {
                        black_box(forecast.quantile(black_box(q)).unwrap());
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_render_figure(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_figure");

    for dims in [4, 16, 64].iter() {
        let (target, forecast) = synthetic_pair(*dims, 100);
        group.bench_with_input(BenchmarkId::new("render", dims), dims, |b, _| {
            b.iter(|| {
                let figure =
                    render(&target, &forecast, 24, &PlotConfig::default()).unwrap();
                black_box(figure)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_quantile_queries, bench_render_figure);
criterion_main!(benches);
