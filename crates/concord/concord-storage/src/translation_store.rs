//! Translations and suggestions keyed by id, with a pair-key index for
//! conflict detection.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use concord_core::errors::{ConcordError, ConcordResult};
use concord_core::models::{same_language, Translation, TranslationSuggestion};
use concord_core::traits::{ISuggestionStore, ITranslationStore};

pub struct InMemoryTranslationStore {
    translations: DashMap<String, Translation>,
    /// Pair key → id of the current translation for that pair.
    translation_keys: DashMap<String, String>,
    suggestions: DashMap<String, TranslationSuggestion>,
    /// Pair key → suggestion id.
    suggestion_keys: DashMap<String, String>,
}

impl InMemoryTranslationStore {
    pub fn new() -> Self {
        Self {
            translations: DashMap::new(),
            translation_keys: DashMap::new(),
            suggestions: DashMap::new(),
            suggestion_keys: DashMap::new(),
        }
    }

    pub fn translation_count(&self) -> usize {
        self.translations.len()
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    fn not_found(id: &str) -> ConcordError {
        ConcordError::TranslationNotFound { id: id.to_string() }
    }
}

impl Default for InMemoryTranslationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ITranslationStore for InMemoryTranslationStore {
    fn insert_translation(&self, translation: &Translation) -> ConcordResult<()> {
        // The key entry stays locked until the record is in place.
        match self.translation_keys.entry(translation.key()) {
            Entry::Occupied(mut slot) => {
                let blocked = self
                    .translations
                    .get(slot.get())
                    .is_some_and(|existing| existing.is_confirmed());
                if blocked {
                    return Err(ConcordError::Conflict {
                        source_word_id: translation.source_word_id.clone(),
                        target_language: translation.language.clone(),
                        translated_word: translation.translated_word.clone(),
                    });
                }
                self.translations
                    .insert(translation.id.clone(), translation.clone());
                slot.insert(translation.id.clone());
            }
            Entry::Vacant(slot) => {
                self.translations
                    .insert(translation.id.clone(), translation.clone());
                slot.insert(translation.id.clone());
            }
        }
        Ok(())
    }

    fn get_translation(&self, id: &str) -> ConcordResult<Option<Translation>> {
        Ok(self.translations.get(id).map(|t| t.clone()))
    }

    fn update_translation(&self, translation: &Translation) -> ConcordResult<()> {
        match self.translations.get_mut(&translation.id) {
            Some(mut existing) => {
                // The ledger owns the vote total.
                let votes = existing.votes;
                *existing = translation.clone();
                existing.votes = votes;
                Ok(())
            }
            None => Err(Self::not_found(&translation.id)),
        }
    }

    fn find_translation(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
    ) -> ConcordResult<Option<Translation>> {
        let key = Translation::pair_key(source_word_id, language, translated_word);
        let Some(id) = self.translation_keys.get(&key).map(|id| id.clone()) else {
            return Ok(None);
        };
        self.get_translation(&id)
    }

    fn translations_for(
        &self,
        source_word_id: &str,
        language: Option<&str>,
    ) -> ConcordResult<Vec<Translation>> {
        let mut found: Vec<Translation> = self
            .translations
            .iter()
            .filter(|t| {
                t.source_word_id == source_word_id
                    && language.map_or(true, |lang| same_language(&t.language, lang))
            })
            .map(|t| t.clone())
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(found)
    }

    fn all_translations(&self) -> ConcordResult<Vec<Translation>> {
        let mut all: Vec<Translation> = self.translations.iter().map(|t| t.clone()).collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    fn adjust_votes(&self, id: &str, delta: i64) -> ConcordResult<i64> {
        let mut translation = self
            .translations
            .get_mut(id)
            .ok_or_else(|| Self::not_found(id))?;
        translation.votes += delta;
        Ok(translation.votes)
    }
}

impl ISuggestionStore for InMemoryTranslationStore {
    fn insert_suggestion_if_absent(
        &self,
        suggestion: &TranslationSuggestion,
    ) -> ConcordResult<TranslationSuggestion> {
        let key = Translation::pair_key(
            &suggestion.source_word_id,
            &suggestion.target_language,
            &suggestion.translated_word,
        );
        match self.suggestion_keys.entry(key) {
            Entry::Occupied(mut slot) => {
                if let Some(existing) = self.suggestions.get(slot.get()) {
                    return Ok(existing.clone());
                }
                // Dangling key: re-point it at the new record.
                self.suggestions
                    .insert(suggestion.id.clone(), suggestion.clone());
                slot.insert(suggestion.id.clone());
            }
            Entry::Vacant(slot) => {
                self.suggestions
                    .insert(suggestion.id.clone(), suggestion.clone());
                slot.insert(suggestion.id.clone());
            }
        }
        Ok(suggestion.clone())
    }

    fn get_suggestion(&self, id: &str) -> ConcordResult<Option<TranslationSuggestion>> {
        Ok(self.suggestions.get(id).map(|s| s.clone()))
    }

    fn find_suggestion(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
    ) -> ConcordResult<Option<TranslationSuggestion>> {
        let key = Translation::pair_key(source_word_id, language, translated_word);
        let Some(id) = self.suggestion_keys.get(&key).map(|id| id.clone()) else {
            return Ok(None);
        };
        self.get_suggestion(&id)
    }

    fn update_suggestion(&self, suggestion: &TranslationSuggestion) -> ConcordResult<()> {
        match self.suggestions.get_mut(&suggestion.id) {
            Some(mut existing) => {
                *existing = suggestion.clone();
                Ok(())
            }
            None => Err(Self::not_found(&suggestion.id)),
        }
    }

    fn pending_suggestions(
        &self,
        source_word_id: &str,
    ) -> ConcordResult<Vec<TranslationSuggestion>> {
        let mut pending: Vec<TranslationSuggestion> = self
            .suggestions
            .iter()
            .filter(|s| s.source_word_id == source_word_id && s.is_pending())
            .map(|s| s.clone())
            .collect();
        pending.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use concord_core::models::{Confidence, ValidationType};

    fn translation(id: &str, word: &str, confidence: f64) -> Translation {
        let now = Utc::now();
        Translation {
            id: id.into(),
            source_word_id: "w1".into(),
            language: "en".into(),
            translated_word: word.into(),
            context: vec![],
            confidence: Confidence::new(confidence),
            votes: 0,
            validation_type: ValidationType::Manual,
            target_word_id: None,
            created_by: "alice".into(),
            validated_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn duplicate_confirmed_pair_conflicts() {
        let store = InMemoryTranslationStore::new();
        store.insert_translation(&translation("t1", "cat", 0.9)).unwrap();
        let err = store
            .insert_translation(&translation("t2", "Cat ", 0.9))
            .unwrap_err();
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(store.translation_count(), 1);
    }

    #[test]
    fn regional_variant_shares_the_pair() {
        let store = InMemoryTranslationStore::new();
        store.insert_translation(&translation("t1", "kitty", 0.9)).unwrap();

        let mut regional = translation("t2", "kitty", 0.9);
        regional.language = "en-GB".into();
        assert_eq!(store.insert_translation(&regional).unwrap_err().code(), "CONFLICT");

        let listed = store.translations_for("w1", Some("en-US")).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "t1");
        assert!(store.translations_for("w1", Some("es")).unwrap().is_empty());
    }

    #[test]
    fn rejected_pair_can_be_resubmitted() {
        let store = InMemoryTranslationStore::new();
        store.insert_translation(&translation("t1", "cat", 0.0)).unwrap();
        store.insert_translation(&translation("t2", "cat", 0.8)).unwrap();
        let current = store.find_translation("w1", "en", "cat").unwrap().unwrap();
        assert_eq!(current.id, "t2");
        // The rejected record is kept.
        assert!(store.get_translation("t1").unwrap().is_some());
    }

    #[test]
    fn update_preserves_vote_total() {
        let store = InMemoryTranslationStore::new();
        store.insert_translation(&translation("t1", "cat", 0.9)).unwrap();
        store.adjust_votes("t1", 3).unwrap();

        let mut edited = translation("t1", "cat", 0.5);
        edited.votes = 0;
        store.update_translation(&edited).unwrap();

        let stored = store.get_translation("t1").unwrap().unwrap();
        assert_eq!(stored.votes, 3);
        assert_eq!(stored.confidence.value(), 0.5);
    }

    #[test]
    fn adjust_votes_on_missing_translation_fails() {
        let store = InMemoryTranslationStore::new();
        assert_eq!(
            store.adjust_votes("nope", 1).unwrap_err().code(),
            "TRANSLATION_NOT_FOUND"
        );
    }
}
