use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use wordscan::corpus::Corpus;
use wordscan::entry::Entry;
use wordscan::search::{search_all_by_sha256, search_by_custom_hash, search_by_text};

const SYNTHETIC_WORDS: usize = 200_000;
const QUERY_OFFSET: usize = 100_000;

/// Deterministic synthetic word list, used when no words.txt is present.
/// Short random lowercase words collide often enough to produce duplicates.
fn synthetic_words(count: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut blob = String::with_capacity(count * 8);
    for _ in 0..count {
        let len = rng.gen_range(3..=10);
        for _ in 0..len {
            blob.push(rng.gen_range(b'a'..=b'z') as char);
        }
        blob.push(' ');
    }
    blob
}

fn load_corpus() -> Corpus {
    match Corpus::load("words.txt") {
        Ok(corpus) if corpus.len() > QUERY_OFFSET => corpus,
        _ => Corpus::from_text(&synthetic_words(SYNTHETIC_WORDS)),
    }
}

fn bench_strategies(c: &mut Criterion) {
    let corpus = load_corpus();
    let query = corpus
        .query_word(QUERY_OFFSET)
        .expect("query offset within corpus")
        .to_string();

    let mut group = c.benchmark_group("search_strategies");

    type Strategy = (&'static str, for<'a> fn(&'a Corpus, &str) -> Vec<&'a Entry>);
    let strategies: &[Strategy] = &[
        ("search_all_by_sha256", search_all_by_sha256),
        ("search_by_custom_hash", search_by_custom_hash),
        ("search_by_text", search_by_text),
    ];

    for &(name, strategy) in strategies {
        group.bench_function(name, |b| {
            b.iter(|| black_box(strategy(&corpus, black_box(&query))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
