// ============================================================================
// Evaluator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Operations - Each operation over representative operands
// 2. Square Root - cost across magnitudes
// 3. Store - Create and lookup against the in-memory record list
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use std::hint::black_box;
use student_calc::prelude::*;

// ============================================================================
// Operation Benchmarks
// ============================================================================

fn benchmark_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let a: Decimal = "12345.6789012345".parse().unwrap();
    let b: Decimal = "3.1415926535".parse().unwrap();

    for op in Operation::ALL {
        group.bench_with_input(BenchmarkId::new("op", op.tag()), &op, |bench, &op| {
            bench.iter(|| black_box(evaluate(black_box(a), Some(black_box(b)), op)));
        });
    }

    group.finish();
}

// ============================================================================
// Square Root Benchmarks
// ============================================================================

fn benchmark_square_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");

    for magnitude in ["0.0000000002", "2", "20000000000", "200000000000000000000"] {
        let a: Decimal = magnitude.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("magnitude", magnitude), &a, |bench, &a| {
            bench.iter(|| black_box(evaluate(black_box(a), None, Operation::Sqrt)));
        });
    }

    group.finish();
}

// ============================================================================
// Store Benchmarks
// ============================================================================

fn benchmark_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("student_store");

    group.bench_function("create", |bench| {
        let store = StudentStore::new();
        bench.iter(|| black_box(store.create(NewStudent::new("Alice", 20, "A"))));
    });

    for size in [10u64, 100, 1000] {
        let store = StudentStore::new();
        for _ in 0..size {
            store.create(NewStudent::new("Alice", 20, "A"));
        }
        // Worst case: last record in the list
        group.bench_with_input(BenchmarkId::new("get_last", size), &size, |bench, &size| {
            bench.iter(|| black_box(store.get(StudentId::new(size))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_operations,
    benchmark_square_root,
    benchmark_store
);
criterion_main!(benches);
