use criterion::{criterion_group, criterion_main, Criterion};
use engine::artifact::Artifact;
use engine::{search, Index};
use std::collections::HashMap;

/// A few common words with long, heavily overlapping posting lists plus a
/// tail of rare words, roughly the shape of a small article site.
fn synthetic_index() -> Index {
    let mut words: HashMap<String, Vec<(u32, u32)>> = HashMap::new();
    let mut articles = HashMap::new();

    for doc in 0..2_000u32 {
        articles.insert(doc, format!("<p>article {doc}</p>"));
    }
    words.insert("alpha".into(), (0..2_000).map(|d| (d, d % 7 + 1)).collect());
    words.insert("beta".into(), (0..2_000).step_by(2).map(|d| (d, d % 5 + 1)).collect());
    words.insert("gamma".into(), (0..2_000).step_by(3).map(|d| (d, d % 3 + 1)).collect());
    for rare in 0..500u32 {
        words.insert(format!("rare{rare}"), vec![(rare * 4 % 2_000, 2)]);
    }

    Index::from_artifact(Artifact { words, articles }).unwrap()
}

fn bench_search(c: &mut Criterion) {
    let index = synthetic_index();
    c.bench_function("search_single_word", |b| b.iter(|| search(&index, "alpha")));
    c.bench_function("search_three_word_intersection", |b| {
        b.iter(|| search(&index, "alpha beta gamma"))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
