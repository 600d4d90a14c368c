//! Benchmarks for classification and group construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use yijing::classify::{mantra, relation, symmetry, Partition, Symmetry};
use yijing::sequence::{bagua, Sequence, KING_WEN};
use yijing::{AminoAcid, Hexagram, Transition};

fn bench_classifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifiers");
    group.throughput(Throughput::Elements(64));

    group.bench_function("symmetry", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(symmetry(black_box(h)));
            }
        });
    });

    group.bench_function("mantra", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(mantra(black_box(h)));
            }
        });
    });

    group.bench_function("amino_acid", |b| {
        b.iter(|| {
            for h in Hexagram::all() {
                black_box(AminoAcid::of(black_box(h)));
            }
        });
    });

    group.finish();
}

fn bench_relation(c: &mut Criterion) {
    let mut group = c.benchmark_group("relation");
    group.throughput(Throughput::Elements(64 * 64));

    group.bench_function("all_pairs", |b| {
        b.iter(|| {
            for a in Hexagram::all() {
                for z in Hexagram::all() {
                    black_box(relation(black_box(a), black_box(z)));
                }
            }
        });
    });

    group.finish();
}

fn bench_partition_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_compute");
    group.throughput(Throughput::Elements(64));

    group.bench_function("symmetry", |b| {
        b.iter(|| black_box(Partition::<Symmetry>::compute()));
    });
    group.bench_function("transition", |b| {
        b.iter(|| black_box(Partition::<Transition>::compute()));
    });
    group.bench_function("amino_acid", |b| {
        b.iter(|| black_box(Partition::<AminoAcid>::compute()));
    });

    group.finish();
}

fn bench_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequences");
    group.throughput(Throughput::Elements(64));

    group.bench_function("sequence_new", |b| {
        let table = *KING_WEN.forward();
        b.iter(|| black_box(Sequence::new(black_box(&table))));
    });
    group.bench_function("generate_hexagrams", |b| {
        b.iter(|| black_box(bagua::generate_hexagrams(black_box(&bagua::LATER_HEAVEN_ORDER))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classifiers,
    bench_relation,
    bench_partition_compute,
    bench_sequences,
);
criterion_main!(benches);
