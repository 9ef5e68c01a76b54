//! Integration tests for candidate discovery against the in-memory index.

use std::sync::Arc;
use std::time::Duration;

use concord_core::config::DiscoveryConfig;
use concord_core::models::{Definition, Meaning, Word};
use concord_discovery::{
    CandidateFinder, ILanguageCache, NoopLanguageCache, SimilarityScorer, TtlLanguageCache,
};
use concord_storage::InMemoryWordIndex;

fn word(id: &str, text: &str, lang: &str, category: Option<&str>, def: &str) -> Word {
    Word {
        id: id.into(),
        text: text.into(),
        language: lang.into(),
        category_id: category.map(String::from),
        meanings: vec![Meaning {
            part_of_speech: "noun".into(),
            definitions: vec![Definition {
                text: def.into(),
                examples: vec![],
            }],
        }],
    }
}

fn finder_with(index: Arc<InMemoryWordIndex>, cache: Arc<dyn ILanguageCache>) -> CandidateFinder {
    CandidateFinder::new(
        index,
        SimilarityScorer::default(),
        cache,
        &DiscoveryConfig::default(),
    )
}

fn finder(index: Arc<InMemoryWordIndex>) -> CandidateFinder {
    finder_with(index, Arc::new(NoopLanguageCache))
}

#[test]
fn primary_lookup_is_scoped_to_target_language() {
    let index = Arc::new(InMemoryWordIndex::with_words([
        word("fr-chat", "chat", "fr", None, "petit félin domestique"),
        word("en-chat", "chat", "en", Some("internet-slang"), "online conversation"),
        word("es-chat", "chat", "es", None, "conversación"),
    ]));
    let source = index_word(&index, "fr-chat");

    let found = finder(index).find(&source, "en", None).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "en-chat");
}

#[test]
fn source_word_is_never_a_candidate() {
    let index = Arc::new(InMemoryWordIndex::with_words([word(
        "fr-chat", "chat", "fr", None, "félin",
    )]));
    let source = index_word(&index, "fr-chat");
    assert!(finder(index).find(&source, "fr", None).unwrap().is_empty());
}

#[test]
fn empty_index_is_a_valid_empty_result() {
    let index = Arc::new(InMemoryWordIndex::new());
    let source = word("fr-chat", "chat", "fr", None, "félin");
    let found = finder(Arc::clone(&index)).find(&source, "en", None).unwrap();
    assert!(found.is_empty());
    // Primary + fallback scan.
    assert_eq!(index.lookup_count(), 2);
}

#[test]
fn fallback_scan_recovers_regional_variants() {
    // The index scopes languages strictly, so "en" misses the "en-GB" entry;
    // the broad scan finds it and drops the Spanish homograph.
    let index = Arc::new(InMemoryWordIndex::with_words([
        word("gb-colour", "colour", "en-GB", None, "visual property of light"),
        word("es-colour", "colour", "es", None, "anglicismo"),
    ]));
    let source = word("fr-couleur", "couleur", "fr", None, "propriété de la lumière");

    let found = finder(Arc::clone(&index))
        .find(&source, "en", Some("colour"))
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "gb-colour");
    assert_eq!(index.lookup_count(), 2);
}

#[test]
fn primary_hit_skips_fallback() {
    let index = Arc::new(InMemoryWordIndex::with_words([
        word("en-cat", "cat", "en", None, ""),
        word("es-cat", "cat", "es", None, ""),
    ]));
    let source = word("fr-chat", "chat", "fr", None, "");
    let found = finder(Arc::clone(&index)).find(&source, "en", Some("cat")).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(index.lookup_count(), 1);
}

#[test]
fn results_are_bounded_and_best_first() {
    let mut words: Vec<Word> = (0..30)
        .map(|i| word(&format!("en-{i:02}"), &format!("cat{i}"), "en", None, "unrelated"))
        .collect();
    words.push(word("en-best", "cats", "en", Some("animals"), "feline"));
    let index = Arc::new(InMemoryWordIndex::with_words(words));
    let source = word("fr-chat", "chat", "fr", Some("animals"), "petit félin feline");

    let scored = finder(index).find_scored(&source, "en", Some("cat")).unwrap();
    assert_eq!(scored.len(), 20);
    assert_eq!(scored[0].word.id, "en-best");
    assert!(scored
        .windows(2)
        .all(|w| w[0].evidence.score >= w[1].evidence.score));
}

#[test]
fn index_failure_is_index_unavailable_not_empty() {
    let index = Arc::new(InMemoryWordIndex::new());
    index.set_available(false);
    let source = word("fr-chat", "chat", "fr", None, "félin");
    let err = finder(index).find(&source, "en", None).unwrap_err();
    assert_eq!(err.code(), "INDEX_UNAVAILABLE");
}

#[test]
fn malformed_source_is_rejected_at_the_boundary() {
    let index = Arc::new(InMemoryWordIndex::new());
    let source = word("", "chat", "fr", None, "félin");
    let err = finder(index).find(&source, "en", None).unwrap_err();
    assert_eq!(err.code(), "INVALID_WORD");
}

#[test]
fn missing_word_is_word_not_found() {
    let index = Arc::new(InMemoryWordIndex::new());
    assert_eq!(
        finder(index).get_word("ghost").unwrap_err().code(),
        "WORD_NOT_FOUND"
    );
}

#[test]
fn find_exact_ignores_prefix_matches() {
    let index = Arc::new(InMemoryWordIndex::with_words([
        word("en-cats", "cats", "en", None, ""),
        word("en-cat", "Cat", "en", None, ""),
    ]));
    let hit = finder(index).find_exact("en", "cat").unwrap().unwrap();
    assert_eq!(hit.id, "en-cat");
}

#[test]
fn available_languages_are_cached_until_expiry() {
    let index = Arc::new(InMemoryWordIndex::with_words([
        word("fr-chat", "chat", "fr", None, ""),
        word("en-chat", "chat", "en", None, ""),
        word("de-chat", "chat", "de", None, ""),
    ]));
    let cache = Arc::new(TtlLanguageCache::new(Duration::from_millis(50), 100));
    let finder = finder_with(Arc::clone(&index), cache.clone());
    let source = index_word(&index, "fr-chat");

    let first = finder.available_languages(&source).unwrap();
    assert_eq!(first, vec!["de".to_string(), "en".to_string()]);
    let lookups = index.lookup_count();

    // Served from cache; a new word in the index is not visible yet.
    index.insert(word("it-chat", "chat", "it", None, ""));
    assert_eq!(finder.available_languages(&source).unwrap(), first);
    assert_eq!(index.lookup_count(), lookups);

    std::thread::sleep(Duration::from_millis(120));
    let refreshed = finder.available_languages(&source).unwrap();
    assert_eq!(refreshed.len(), 3);
    assert!(cache.hits() >= 1);
}

fn index_word(index: &InMemoryWordIndex, id: &str) -> Word {
    use concord_core::traits::IWordIndex;
    index.get_word(id).unwrap().unwrap()
}
