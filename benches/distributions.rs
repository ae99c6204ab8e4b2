use std::cmp::Ordering;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp, Normal, Uniform};
use shapesort::Algorithm;

const SIZE: usize = 5_000;

fn descending(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

fn sample<D: Distribution<f64>>(dist: D, rng: &mut StdRng) -> Vec<f64> {
    dist.sample_iter(rng).take(SIZE).collect()
}

fn inputs() -> Vec<(&'static str, Vec<f64>)> {
    let mut rng = StdRng::seed_from_u64(12345);
    let uniform = sample(Uniform::new(0.0, 1.0), &mut rng);
    let normal = sample(Normal::new(0.0, 1.0).unwrap(), &mut rng);
    let exponential = sample(Exp::new(1.0).unwrap(), &mut rng);
    // heights rounded to whole units, many duplicates
    let few_unique = uniform.iter().map(|x| (x * 16.0).floor()).collect();

    let mut sorted = uniform.clone();
    sorted.sort_by(descending);
    let mut reversed = sorted.clone();
    reversed.reverse();

    vec![
        ("uniform", uniform),
        ("normal", normal),
        ("exponential", exponential),
        ("few_unique", few_unique),
        ("sorted", sorted),
        ("reversed", reversed),
    ]
}

fn benchmark_distributions(c: &mut Criterion) {
    for (name, data) in inputs() {
        let mut group = c.benchmark_group(format!("{} {}", name, SIZE));
        for algorithm in Algorithm::ALL {
            group.bench_function(BenchmarkId::from_parameter(algorithm), |b| {
                b.iter_batched_ref(
                    || data.clone(),
                    |arr| algorithm.run(black_box(arr), descending),
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }
}

criterion_group!(name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_distributions);
criterion_main!(benches);
