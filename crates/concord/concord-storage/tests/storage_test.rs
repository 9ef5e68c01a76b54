//! Integration tests for the in-memory stores.

use std::sync::Arc;
use std::thread;

use chrono::Utc;
use concord_core::models::*;
use concord_core::traits::*;
use concord_storage::*;

fn vote(translation_id: &str, voter: &str, value: VoteValue) -> VoteRecord {
    VoteRecord {
        translation_id: translation_id.into(),
        voter_id: voter.into(),
        value,
        cast_at: Utc::now(),
    }
}

fn suggestion(word: &str) -> TranslationSuggestion {
    TranslationSuggestion {
        id: uuid::Uuid::new_v4().to_string(),
        source_word_id: "w1".into(),
        target_word_id: Some(format!("t-{word}")),
        target_language: "en".into(),
        translated_word: word.into(),
        similarity_score: 0.6,
        shared_keywords: Default::default(),
        same_category: false,
        status: SuggestionStatus::Pending,
        created_at: Utc::now(),
        translation_id: None,
    }
}

#[test]
fn concurrent_duplicate_votes_count_once() {
    let store = Arc::new(InMemoryVoteStore::new());
    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.try_insert(&vote("t1", "alice", VoteValue::Up)).unwrap())
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(Option::is_some)
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(store.vote_total("t1").unwrap(), 1);
}

#[test]
fn concurrent_distinct_voters_all_count() {
    let store = Arc::new(InMemoryVoteStore::new());
    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = Arc::clone(&store);
            let value = if i % 4 == 0 { VoteValue::Down } else { VoteValue::Up };
            thread::spawn(move || {
                store
                    .try_insert(&vote("t1", &format!("voter-{i}"), value))
                    .unwrap()
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap().is_some());
    }
    // 15 up, 5 down.
    assert_eq!(store.vote_total("t1").unwrap(), 10);
    assert_eq!(store.votes_for("t1").unwrap().len(), 20);
}

#[test]
fn vote_total_may_go_negative() {
    let store = InMemoryVoteStore::new();
    store.try_insert(&vote("t1", "a", VoteValue::Down)).unwrap();
    let total = store.try_insert(&vote("t1", "b", VoteValue::Down)).unwrap();
    assert_eq!(total, Some(-2));
}

#[test]
fn suggestion_insert_is_idempotent_per_pair() {
    let store = InMemoryTranslationStore::new();
    let first = store.insert_suggestion_if_absent(&suggestion("chat")).unwrap();
    let second = store.insert_suggestion_if_absent(&suggestion("chat")).unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(store.suggestion_count(), 1);
    assert_eq!(store.pending_suggestions("w1").unwrap().len(), 1);
}

#[test]
fn resolved_suggestions_leave_pending_list() {
    let store = InMemoryTranslationStore::new();
    let mut s = store.insert_suggestion_if_absent(&suggestion("chat")).unwrap();
    s.status = SuggestionStatus::Rejected;
    store.update_suggestion(&s).unwrap();
    assert!(store.pending_suggestions("w1").unwrap().is_empty());
}

#[test]
fn suggestion_lookup_by_pair_ignores_case() {
    let store = InMemoryTranslationStore::new();
    let stored = store.insert_suggestion_if_absent(&suggestion("chat")).unwrap();

    let found = store.find_suggestion("w1", "EN", " Chat").unwrap().unwrap();
    assert_eq!(found.id, stored.id);
    assert!(store.find_suggestion("w1", "en", "cat").unwrap().is_none());
}
