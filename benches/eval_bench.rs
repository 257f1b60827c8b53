//! Criterion benchmarks for pcg-bench evaluation machinery.
//!
//! Measures the cost of sampling, content swaps, and full batch evaluation
//! on the door-maze problem at a few grid sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pcg_bench::problem::{evaluate, Problem};
use pcg_bench::probs::{DoorMazeConfig, DoorMazeProblem};
use pcg_bench::random::create_rng;
use pcg_bench::space::{ArraySpace, IntSpace};

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for size in [14usize, 28, 56] {
        let space = ArraySpace::new([size, size], IntSpace::new(2));
        group.bench_with_input(BenchmarkId::from_parameter(size), &space, |b, space| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(space.sample(&mut rng)));
        });
    }
    group.finish();
}

fn bench_content_swap(c: &mut Criterion) {
    let space = ArraySpace::new([28, 28], IntSpace::new(2));
    let mut rng = create_rng(42);
    let a = space.sample(&mut rng);
    let b_parent = space.sample(&mut rng);

    c.bench_function("content_swap 28x28 p=0.5", |b| {
        let mut rng = create_rng(7);
        b.iter(|| {
            black_box(
                space
                    .content_swap(&a, &b_parent, 0.5, None, &mut rng)
                    .unwrap(),
            )
        });
    });
}

fn bench_batch_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for size in [14usize, 28] {
        let problem =
            DoorMazeProblem::new(DoorMazeConfig::default().with_size(size, size)).unwrap();
        let mut rng = create_rng(42);
        let batch: Vec<_> = (0..32).map(|_| problem.sample_content(&mut rng)).collect();
        let controls = [problem.target()];

        group.bench_with_input(
            BenchmarkId::new("batch32", size),
            &(problem, batch, controls),
            |b, (problem, batch, controls)| {
                b.iter(|| black_box(evaluate(problem, batch, Some(controls)).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sampling,
    bench_content_swap,
    bench_batch_evaluation
);
criterion_main!(benches);
