//! Property tests for the similarity scorer.

use proptest::prelude::*;

use concord_core::models::{Definition, Meaning, Word};
use concord_discovery::SimilarityScorer;

fn arb_word() -> impl Strategy<Value = Word> {
    (
        "[a-zé]{1,12}",
        "(fr|en|es)",
        proptest::option::of("(animals|food|slang)"),
        proptest::collection::vec("[a-zA-Zé ,.0-9]{0,40}", 0..4),
    )
        .prop_map(|(text, language, category_id, defs)| Word {
            id: format!("{language}-{text}"),
            text,
            language,
            category_id,
            meanings: vec![Meaning {
                part_of_speech: "noun".into(),
                definitions: defs
                    .into_iter()
                    .map(|text| Definition {
                        text,
                        examples: vec![],
                    })
                    .collect(),
            }],
        })
}

proptest! {
    #[test]
    fn prop_score_is_bounded(a in arb_word(), b in arb_word()) {
        let ev = SimilarityScorer::default().score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ev.score));
    }

    #[test]
    fn prop_score_is_deterministic(a in arb_word(), b in arb_word()) {
        let scorer = SimilarityScorer::default();
        prop_assert_eq!(scorer.score(&a, &b), scorer.score(&a, &b));
    }

    #[test]
    fn prop_category_bonus_alone_reaches_point_eight(a in arb_word(), b in arb_word()) {
        let mut a = a;
        let mut b = b;
        a.category_id = Some("animals".into());
        b.category_id = Some("animals".into());
        let ev = SimilarityScorer::default().score(&a, &b);
        prop_assert!(ev.score >= 0.8);
    }

    #[test]
    fn prop_evidence_matches_score(a in arb_word(), b in arb_word()) {
        let ev = SimilarityScorer::default().score(&a, &b);
        let mut expected: f64 = 0.5;
        if ev.same_category { expected += 0.3; }
        if !ev.shared_keywords.is_empty() { expected += 0.2; }
        if ev.length_match { expected += 0.1; }
        prop_assert_eq!(ev.score, expected.min(1.0));
    }
}
