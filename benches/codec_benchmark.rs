// ============================================================================
// Quantity Codec Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Format - canonical to display
// 2. Parse - clean display input vs. input that needs sanitizing
// 3. Validate - accepted vs. rejected canonical values
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quantity_codec::prelude::*;
use std::hint::black_box;

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for canonical in ["0", "1450.45", "9999999999.999", "1234567.8901"] {
        group.bench_with_input(BenchmarkId::from_parameter(canonical), canonical, |b, input| {
            b.iter(|| black_box(format(black_box(input))))
        });
    }

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let inputs = [
        ("clean", "1.450,450"),
        ("sanitize", "1a.4b50,4,5x"),
        ("truncate", "123.456.789.012,3456"),
        ("empty", ""),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("lenient", name), input, |b, input| {
            b.iter(|| black_box(parse(black_box(input))))
        });
        group.bench_with_input(BenchmarkId::new("strict", name), input, |b, input| {
            b.iter(|| black_box(parse_strict(black_box(input))))
        });
    }

    group.finish();
}

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for (name, input) in [
        ("ok", "1450.450"),
        ("format", "1.2.3"),
        ("overflow", "12345678901.000"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(validate(black_box(input))))
        });
    }

    group.bench_function("quantity_from_display", |b| {
        b.iter(|| black_box(Quantity::from_display(black_box("1.450,45"))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_format, benchmark_parse, benchmark_validate);
criterion_main!(benches);
