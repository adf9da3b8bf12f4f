//! Benchmarks for jamo decomposition and edit distance.
//!
//! Scenarios:
//! - Word length (single syllable up to a short phrase)
//! - Similarity pattern (identical, one jamo off, unrelated)
//! - Syllable vs jamo granularity

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jamo_match::distance::{sequence_distance, standard_distance};
use jamo_match::hangul::{assemble, disassemble};

// ============================================================================
// Test Data Generation
// ============================================================================

fn generate_test_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        // (name, source, target)
        ("empty", "", ""),
        ("short_identical", "기린", "기린"),
        ("short_1jamo", "그린", "기린"),
        ("short_cluster", "닥", "닭"),
        ("short_different", "사자", "코끼리"),
        ("medium_1jamo", "아이스크린", "아이스크림"),
        ("medium_compound", "괜찬아", "괜찮아"),
        ("medium_different", "떡볶이", "원숭이"),
        (
            "long_similar",
            "가나다라마바사아자차",
            "거나더라머바사아자차",
        ),
        (
            "long_phrase",
            "동해물과 백두산이 마르고 닳도록",
            "동해물과 백두산이 마르고 닳토록",
        ),
        ("mixed_script", "AI 그림 그리기", "AI 그림그리기"),
    ]
}

// ============================================================================
// Decomposition Benchmarks
// ============================================================================

fn bench_disassemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("hangul/disassemble");

    for (name, source, _) in generate_test_pairs() {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &source, |b, &s| {
            b.iter(|| disassemble(black_box(s)));
        });
    }

    group.finish();
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("hangul/assemble");

    for (name, source, _) in generate_test_pairs() {
        let jamo = disassemble(source);
        group.throughput(Throughput::Elements(jamo.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &jamo, |b, jamo| {
            b.iter(|| assemble(black_box(jamo)));
        });
    }

    group.finish();
}

// ============================================================================
// Distance Benchmarks
// ============================================================================

fn bench_syllable_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance/syllables");

    for (name, source, target) in generate_test_pairs() {
        let size = source.len() + target.len();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, &(s, t)| {
                b.iter(|| standard_distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

fn bench_jamo_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance/jamo");

    for (name, source, target) in generate_test_pairs() {
        let source_jamo = disassemble(source);
        let target_jamo = disassemble(target);
        group.throughput(Throughput::Elements(
            (source_jamo.len() + target_jamo.len()) as u64,
        ));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source_jamo, target_jamo),
            |b, (s, t)| {
                b.iter(|| sequence_distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_disassemble,
    bench_assemble,
    bench_syllable_distance,
    bench_jamo_distance
);
criterion_main!(benches);
