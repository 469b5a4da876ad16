use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pqbench::input::{random_integers, random_strings};
use pqbench::{run_mixed_workload, ConstructionMode, Orientation, PriorityQueue};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: u64 = 42;
const MODES: [ConstructionMode; 2] = [ConstructionMode::Floyd, ConstructionMode::Incremental];

fn bench_bulk_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_construction");
    group.sample_size(50);

    for size in [1_000usize, 10_000, 100_000].iter() {
        let data = random_integers(&mut StdRng::seed_from_u64(SEED), *size);

        for mode in MODES {
            group.bench_with_input(BenchmarkId::new(mode.to_string(), size), size, |b, &n| {
                b.iter_batched(
                    || data.clone(),
                    |items| black_box(PriorityQueue::max_heap_from(n, items, mode).unwrap()),
                    criterion::BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

// Ascending input makes every incremental insert sift all the way to the root.
fn bench_sorted_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascending_into_max_heap");
    group.sample_size(30);

    for size in [1_000usize, 10_000, 100_000].iter() {
        let data: Vec<i32> = (0..*size as i32).collect();

        for mode in MODES {
            group.bench_with_input(BenchmarkId::new(mode.to_string(), size), size, |b, &n| {
                b.iter_batched(
                    || data.clone(),
                    |items| black_box(PriorityQueue::max_heap_from(n, items, mode).unwrap()),
                    criterion::BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");
    group.sample_size(30);

    let ints = random_integers(&mut StdRng::seed_from_u64(SEED), 10_000);
    let strings = random_strings(&mut StdRng::seed_from_u64(SEED), 10_000);

    for mode in MODES {
        group.bench_function(BenchmarkId::new("int", mode), |b| {
            let mut rng = StdRng::seed_from_u64(SEED);
            b.iter_batched(
                || ints.clone(),
                |items| {
                    run_mixed_workload(
                        items,
                        0.5,
                        Orientation::Max,
                        mode,
                        |a: &i32, b: &i32| a.cmp(b),
                        &mut rng,
                    )
                    .unwrap()
                },
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_function(BenchmarkId::new("string", mode), |b| {
            let mut rng = StdRng::seed_from_u64(SEED);
            b.iter_batched(
                || strings.clone(),
                |items| {
                    run_mixed_workload(
                        items,
                        0.5,
                        Orientation::Max,
                        mode,
                        |a: &String, b: &String| a.cmp(b),
                        &mut rng,
                    )
                    .unwrap()
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_bulk_construction,
    bench_sorted_construction,
    bench_mixed_workload
);
criterion_main!(benches);
