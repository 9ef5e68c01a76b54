use criterion::{black_box, criterion_group, criterion_main, Criterion};

use concord_core::models::{Definition, Meaning, Word};
use concord_discovery::SimilarityScorer;

fn make_word(i: usize, lang: &str, def: &str) -> Word {
    Word {
        id: format!("{lang}-{i}"),
        text: format!("word{i}"),
        language: lang.to_string(),
        category_id: Some(format!("cat{}", i % 7)),
        meanings: vec![Meaning {
            part_of_speech: "noun".to_string(),
            definitions: vec![Definition {
                text: def.to_string(),
                examples: vec![],
            }],
        }],
    }
}

fn bench_score_pair(c: &mut Criterion) {
    let scorer = SimilarityScorer::default();
    let source = make_word(0, "fr", "petit félin domestique très apprécié des familles");
    let candidate = make_word(1, "en", "small domesticated feline kept as a household pet");
    c.bench_function("score_pair", |b| {
        b.iter(|| scorer.score(black_box(&source), black_box(&candidate)))
    });
}

fn bench_score_batch_20(c: &mut Criterion) {
    let scorer = SimilarityScorer::default();
    let source = make_word(0, "fr", "petit félin domestique très apprécié des familles");
    let batch: Vec<Word> = (0..20)
        .map(|i| make_word(i, "en", "small domesticated feline kept as a household pet"))
        .collect();
    c.bench_function("score_batch_20_sequential", |b| {
        b.iter(|| scorer.score_all(black_box(&source), batch.clone(), usize::MAX))
    });
    c.bench_function("score_batch_20_parallel", |b| {
        b.iter(|| scorer.score_all(black_box(&source), batch.clone(), 1))
    });
}

criterion_group!(benches, bench_score_pair, bench_score_batch_20);
criterion_main!(benches);
