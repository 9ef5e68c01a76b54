//! In-memory stand-in for the external word index.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use dashmap::DashMap;

use concord_core::errors::IndexError;
use concord_core::models::Word;
use concord_core::traits::IWordIndex;

/// Case-insensitive exact or prefix match on word text.
/// Can be switched offline to exercise `IndexUnavailable` paths.
pub struct InMemoryWordIndex {
    words: DashMap<String, Word>,
    available: AtomicBool,
    lookups: AtomicU64,
}

impl InMemoryWordIndex {
    pub fn new() -> Self {
        Self {
            words: DashMap::new(),
            available: AtomicBool::new(true),
            lookups: AtomicU64::new(0),
        }
    }

    pub fn with_words(words: impl IntoIterator<Item = Word>) -> Self {
        let index = Self::new();
        for word in words {
            index.insert(word);
        }
        index
    }

    pub fn insert(&self, word: Word) {
        self.words.insert(word.id.clone(), word);
    }

    pub fn remove(&self, id: &str) -> Option<Word> {
        self.words.remove(id).map(|(_, w)| w)
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of `find_words_by_language` calls served so far.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn check_available(&self) -> Result<(), IndexError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(IndexError::Unreachable {
                reason: "in-memory index switched offline".into(),
            })
        }
    }
}

impl Default for InMemoryWordIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl IWordIndex for InMemoryWordIndex {
    fn find_words_by_language(
        &self,
        language: Option<&str>,
        query: &str,
    ) -> Result<Vec<Word>, IndexError> {
        self.check_available()?;
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<Word> = self
            .words
            .iter()
            .filter(|entry| {
                let word = entry.value();
                language.map_or(true, |lang| word.language.eq_ignore_ascii_case(lang))
                    && word.text.to_lowercase().starts_with(&query)
            })
            .map(|entry| entry.value().clone())
            .collect();
        // DashMap iteration order is arbitrary.
        hits.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(hits)
    }

    fn get_word(&self, id: &str) -> Result<Option<Word>, IndexError> {
        self.check_available()?;
        Ok(self.words.get(id).map(|w| w.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: &str, text: &str, lang: &str) -> Word {
        Word {
            id: id.into(),
            text: text.into(),
            language: lang.into(),
            category_id: None,
            meanings: vec![],
        }
    }

    #[test]
    fn scopes_by_language() {
        let index = InMemoryWordIndex::with_words([word("1", "chat", "fr"), word("2", "chat", "en")]);
        let en = index.find_words_by_language(Some("en"), "chat").unwrap();
        assert_eq!(en.len(), 1);
        assert_eq!(en[0].id, "2");
        assert_eq!(index.find_words_by_language(None, "CHAT").unwrap().len(), 2);
    }

    #[test]
    fn offline_index_errors() {
        let index = InMemoryWordIndex::new();
        index.set_available(false);
        assert!(index.find_words_by_language(None, "x").is_err());
        assert!(index.get_word("1").is_err());
    }

    #[test]
    fn blank_query_matches_nothing() {
        let index = InMemoryWordIndex::with_words([word("1", "chat", "fr")]);
        assert!(index.find_words_by_language(None, "  ").unwrap().is_empty());
    }
}
