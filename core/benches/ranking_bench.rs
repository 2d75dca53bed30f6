use criterion::{criterion_group, criterion_main, Criterion};
use vsm_core::tokenizer::tokenize;
use vsm_core::{Strategy, VectorSpaceModel};

const WORDS: &[&str] = &[
    "river", "bank", "money", "loan", "water", "stream", "credit", "fish", "account", "flood",
    "interest", "bridge", "deposit", "current", "boat", "mortgage",
];

fn corpus(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| (0..40).map(|j| WORDS[(i * 7 + j * 3 + j / 5) % WORDS.len()]).collect::<Vec<_>>().join(" "))
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = corpus(50).join(" ");
    c.bench_function("tokenize_corpus", |b| b.iter(|| tokenize(&text)));
}

fn bench_strategies(c: &mut Criterion) {
    let model = VectorSpaceModel::build(&corpus(500));
    for strategy in Strategy::ALL {
        c.bench_function(&format!("{strategy:?}"), |b| {
            b.iter(|| model.search(strategy, &["river bank loan"]).unwrap())
        });
    }
}

criterion_group!(benches, bench_tokenize, bench_strategies);
criterion_main!(benches);
