//! Criterion benchmarks for sequential vs. row-partitioned multiplication.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matmul_threads::{Matrix, matmul_naive_ijk, multiply};

fn patterned(size: usize, modulo: usize) -> Matrix {
    let data = (0..size * size).map(|i| (i % modulo) as i64).collect();
    Matrix::from_vec(size, size, data).expect("square buffer")
}

fn bench_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_ijk");
    for size in [64, 128, 256] {
        let a = patterned(size, 17);
        let b = patterned(size, 13);
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| matmul_naive_ijk(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn bench_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for size in [128, 256, 512] {
        let a = patterned(size, 17);
        let b = patterned(size, 13);
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));
        for threads in [1, 2, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("{}x{}", size, size), threads),
                &threads,
                |bench, &threads| bench.iter(|| multiply(black_box(&a), black_box(&b), threads)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_naive, bench_threads);
criterion_main!(benches);
