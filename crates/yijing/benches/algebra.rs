//! Benchmarks for hexagram bit operations and lookups.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use yijing::codon::Codon;
use yijing::sequence::{gray, king_wen};
use yijing::{Hexagram, HexagramSet};

fn bench_symmetry_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetry_operators");
    group.throughput(Throughput::Elements(64));

    group.bench_function("invert", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(black_box(h).invert());
            }
        });
    });

    group.bench_function("reverse", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(black_box(h).reverse());
            }
        });
    });

    group.bench_function("opposite", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(black_box(h).opposite());
            }
        });
    });

    group.bench_function("center", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(black_box(h).center());
            }
        });
    });

    group.finish();
}

fn bench_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergence");
    group.throughput(Throughput::Elements(64));

    group.bench_function("root_lut", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(black_box(h).root());
            }
        });
    });

    group.bench_function("center_chain", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(black_box(h).center_chain());
            }
        });
    });

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    group.throughput(Throughput::Elements(1));

    let a = Hexagram::new(0b100_010);
    let z = Hexagram::new(0b010_101);

    group.bench_function("distance", |b| {
        b.iter(|| black_box(black_box(a).distance(black_box(z))));
    });
    group.bench_function("neighbors", |b| {
        b.iter(|| black_box(black_box(a).neighbors()));
    });
    group.bench_function("entropy", |b| {
        b.iter(|| black_box(black_box(a).entropy()));
    });

    group.finish();
}

fn bench_encodings(c: &mut Criterion) {
    let mut group = c.benchmark_group("encodings");
    group.throughput(Throughput::Elements(64));

    group.bench_function("gray_roundtrip", |b| {
        b.iter(|| {
            for n in 0..64u8 {
                black_box(gray::from_gray(gray::to_gray(black_box(n))));
            }
        });
    });

    group.bench_function("king_wen_position", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(king_wen::position(black_box(h)));
            }
        });
    });

    group.bench_function("codon_to_string", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(Codon::from_hexagram(black_box(h)).to_string());
            }
        });
    });

    group.bench_function("codon_parse", |b| {
        b.iter(|| black_box(black_box("GCU").parse::<Codon>()));
    });

    group.finish();
}

fn bench_hexagram_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("hexagram_set");

    let evens = HexagramSet::from_predicate(|h| h.value() % 2 == 0);
    let balanced = HexagramSet::from_predicate(|h| h.line_count() == 3);

    group.bench_function("from_predicate", |b| {
        b.iter(|| black_box(HexagramSet::from_predicate(|h| h.line_count() == 3)));
    });
    group.bench_function("intersection", |b| {
        b.iter(|| black_box(black_box(evens).intersection(black_box(&balanced))));
    });
    group.bench_function("iterate", |b| {
        b.iter(|| black_box(evens).iter().map(|h| u32::from(h.value())).sum::<u32>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_symmetry_operators,
    bench_convergence,
    bench_metrics,
    bench_encodings,
    bench_hexagram_set,
);
criterion_main!(benches);
