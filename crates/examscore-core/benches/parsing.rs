use criterion::{black_box, criterion_group, criterion_main, Criterion};

use examscore_core::importer::parse_answer_key_str;

const ALPHABET: [&str; 6] = ["1000", "0a0F", "AffA", "0110", "f1f1", "111F"];

fn make_key(n: usize) -> String {
    let mut s = format!("{n}\n");
    for i in 0..n {
        s.push_str(ALPHABET[i % ALPHABET.len()]);
        s.push('\n');
    }
    s
}

fn bench_parse_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_answer_key");

    let small = make_key(24);
    let large = make_key(90);
    let broken = {
        let mut s = make_key(90);
        s.push_str("garbage");
        s.replace("111F\n", "1111\n")
    };

    group.bench_function("24_questions", |b| {
        b.iter(|| parse_answer_key_str(black_box(&small)))
    });

    group.bench_function("90_questions", |b| {
        b.iter(|| parse_answer_key_str(black_box(&large)))
    });

    group.bench_function("rejected", |b| {
        b.iter(|| parse_answer_key_str(black_box(&broken)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_key);
criterion_main!(benches);
