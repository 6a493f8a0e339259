use criterion::{black_box, criterion_group, criterion_main, Criterion};

use prepdrill_core::lexicon::raw_score;
use prepdrill_core::model::Difficulty;
use prepdrill_core::score::{extract_score, normalize};

const SHORT_ANSWER: &str = "I would use a HashMap for O(1) lookups.";

const LONG_ANSWER: &str = "I would use a HashMap because it gives O(1) average lookup \
    and I have experience with performance optimization in production. The architecture \
    matters: thread safety and synchronization come into play under concurrency, and \
    testing plus code review keep the implementation honest. For scalability I would \
    benchmark with realistic data, watch garbage collection behavior on the jvm, and \
    document the trade-offs between the different approaches before settling on one.";

fn bench_raw_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_score");

    group.bench_function("short", |b| b.iter(|| raw_score(black_box(SHORT_ANSWER))));
    group.bench_function("long", |b| b.iter(|| raw_score(black_box(LONG_ANSWER))));
    group.bench_function("empty", |b| b.iter(|| raw_score(black_box(""))));

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("pipeline", |b| {
        b.iter(|| {
            let raw = raw_score(black_box(LONG_ANSWER));
            normalize(black_box(LONG_ANSWER), raw, black_box(Difficulty::Medium))
        })
    });

    group.bench_function("short_circuit", |b| {
        b.iter(|| normalize(black_box("idk"), black_box(0), black_box(Difficulty::Hard)))
    });

    group.finish();
}

fn bench_extract_score(c: &mut Criterion) {
    let feedback = format!("{LONG_ANSWER}\n\n**Your Score:** 7/10\n");
    c.bench_function("extract_score", |b| {
        b.iter(|| extract_score(black_box(&feedback)))
    });
}

criterion_group!(benches, bench_raw_score, bench_normalize, bench_extract_score);
criterion_main!(benches);
