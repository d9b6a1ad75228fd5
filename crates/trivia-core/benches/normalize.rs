//! Benchmarks for the pure normalization helpers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use trivia_core::shuffle::answer_options;
use trivia_core::text::decode;

fn bench_decode(c: &mut Criterion) {
    let encoded = "Which film won the Academy Award for &quot;Best Picture&quot; in 1994? \
                   It wasn&#039;t &amp;lt;this one&amp;gt;.";
    c.bench_function("decode_entities", |b| {
        b.iter(|| decode(black_box(encoded)))
    });

    let plain = "Which film won the Academy Award for Best Picture in 1994?";
    c.bench_function("decode_plain_text", |b| b.iter(|| decode(black_box(plain))));
}

fn bench_shuffle(c: &mut Criterion) {
    let incorrect: Vec<String> = vec!["Paris".into(), "Berlin".into(), "Madrid".into()];
    c.bench_function("shuffle_four_options", |b| {
        let mut rng = StdRng::seed_from_u64(99);
        b.iter(|| answer_options(black_box("Rome"), black_box(&incorrect), &mut rng))
    });
}

criterion_group!(benches, bench_decode, bench_shuffle);
criterion_main!(benches);
