//! Criterion benchmarks for u-dtree induction and search.
//!
//! Uses a synthetic dataset with mixed attribute kinds so the numbers
//! reflect split search and decoding cost rather than any real data set.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_dtree::data::{AttributeKind, Dataset};
use u_dtree::ga::{GaConfig, GaRunner};
use u_dtree::greedy::GreedyInducer;
use u_dtree::ls::{LsConfig, LsRunner};
use u_dtree::random::create_rng;

// ===========================================================================
// Synthetic data: noisy threshold rule over two numeric attributes
// ===========================================================================

fn synthetic(n_samples: usize) -> Dataset {
    let mut rng = create_rng(Some(42));
    let mut rows = Vec::with_capacity(n_samples);
    let mut labels = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let x0: f64 = rng.random_range(0.0..10.0);
        let x1: f64 = rng.random_range(0.0..10.0);
        let x2 = rng.random_range(0..4) as f64;
        let x3: f64 = rng.random_range(0.0..1.0);
        let clean = usize::from(x0 + x1 > 10.0 || x2 == 3.0);
        let label = if rng.random_bool(0.05) { 1 - clean } else { clean };
        rows.push(vec![x0, x1, x2, x3]);
        labels.push(label);
    }
    let kinds = vec![
        AttributeKind::Numerical,
        AttributeKind::Numerical,
        AttributeKind::Categorical { levels: 4 },
        AttributeKind::Numerical,
    ];
    match Dataset::new(rows, labels, kinds, 2) {
        Ok(data) => data,
        Err(e) => panic!("synthetic dataset is invalid: {e}"),
    }
}

fn inducer(data: &Dataset, max_depth: usize) -> GreedyInducer<'_> {
    match GreedyInducer::new(data, max_depth) {
        Ok(inducer) => inducer,
        Err(e) => panic!("invalid depth: {e}"),
    }
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[100, 500, 2000] {
        let data = synthetic(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, d| {
            let inducer = inducer(d, 4);
            b.iter(|| black_box(inducer.greedy()))
        });
    }
    group.finish();
}

fn bench_multistart(c: &mut Criterion) {
    let mut group = c.benchmark_group("ls_multistart");
    group.sample_size(10);

    for &depth in &[2, 3, 4] {
        let data = synthetic(300);
        let config = LsConfig::default().with_num_trials(10).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(depth),
            &(data, config),
            |b, (d, c)| {
                let inducer = inducer(d, depth);
                b.iter(|| black_box(LsRunner::multistart(&inducer, black_box(c))))
            },
        );
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for &(pop, gen) in &[(20, 5), (50, 5)] {
        let data = synthetic(300);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &(data, config),
            |b, (d, c)| {
                let inducer = inducer(d, 3);
                b.iter(|| black_box(GaRunner::run(&inducer, black_box(c))))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_multistart, bench_ga);
criterion_main!(benches);
