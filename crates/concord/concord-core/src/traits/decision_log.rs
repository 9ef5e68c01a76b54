use crate::errors::ConcordResult;
use crate::models::{DecisionOutcome, DecisionRecord, SuggestedAction};

/// Log of automatic decisions and their eventual human verdicts.
pub trait IDecisionLog: Send + Sync {
    /// Record a decision for (source word, language, translated word).
    /// An unresolved record is replaced when the new action differs; a
    /// resolved one is kept. Returns `false` when nothing was written.
    fn record_decision(&self, record: &DecisionRecord) -> ConcordResult<bool>;
    /// Set the final action for a logged pair. Returns `false` when the pair
    /// was never decided automatically.
    fn resolve_decision(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
        final_action: SuggestedAction,
    ) -> ConcordResult<bool>;
    fn find_decision(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
    ) -> ConcordResult<Option<DecisionRecord>>;
    /// The `limit` most recently resolved outcomes, newest first.
    fn resolved_outcomes(&self, limit: usize) -> ConcordResult<Vec<DecisionOutcome>>;
}
