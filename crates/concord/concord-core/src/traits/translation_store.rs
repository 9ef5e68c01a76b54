use crate::errors::ConcordResult;
use crate::models::{Translation, TranslationSuggestion};

/// Persisted translations. Records are never deleted.
pub trait ITranslationStore: Send + Sync {
    /// Insert a new record. Fails with `Conflict` when a confirmed translation
    /// already holds the same (source word, language, translated word) key;
    /// the check and the insert happen atomically.
    fn insert_translation(&self, translation: &Translation) -> ConcordResult<()>;
    fn get_translation(&self, id: &str) -> ConcordResult<Option<Translation>>;
    fn update_translation(&self, translation: &Translation) -> ConcordResult<()>;
    /// Current record for a (source word, language, translated word) key.
    fn find_translation(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
    ) -> ConcordResult<Option<Translation>>;
    fn translations_for(
        &self,
        source_word_id: &str,
        language: Option<&str>,
    ) -> ConcordResult<Vec<Translation>>;
    fn all_translations(&self) -> ConcordResult<Vec<Translation>>;
    /// Atomically add `delta` to the stored vote total and return the new total.
    fn adjust_votes(&self, id: &str, delta: i64) -> ConcordResult<i64>;
}

/// Suggestions awaiting or past human review.
pub trait ISuggestionStore: Send + Sync {
    /// Insert unless a suggestion for the same key exists. Returns the stored record.
    fn insert_suggestion_if_absent(
        &self,
        suggestion: &TranslationSuggestion,
    ) -> ConcordResult<TranslationSuggestion>;
    fn get_suggestion(&self, id: &str) -> ConcordResult<Option<TranslationSuggestion>>;
    fn find_suggestion(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
    ) -> ConcordResult<Option<TranslationSuggestion>>;
    fn update_suggestion(&self, suggestion: &TranslationSuggestion) -> ConcordResult<()>;
    fn pending_suggestions(&self, source_word_id: &str)
        -> ConcordResult<Vec<TranslationSuggestion>>;
}
