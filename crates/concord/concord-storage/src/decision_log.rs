//! Decision log keyed by (source word, language, translated word).

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use concord_core::errors::ConcordResult;
use concord_core::models::{DecisionOutcome, DecisionRecord, SuggestedAction, Translation};
use concord_core::traits::IDecisionLog;

struct LoggedDecision {
    record: DecisionRecord,
    /// Monotonic resolution sequence; orders outcomes newest-first.
    resolved_seq: Option<u64>,
}

pub struct InMemoryDecisionLog {
    decisions: DashMap<String, LoggedDecision>,
    next_seq: AtomicU64,
}

impl InMemoryDecisionLog {
    pub fn new() -> Self {
        Self {
            decisions: DashMap::new(),
            next_seq: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

impl Default for InMemoryDecisionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl IDecisionLog for InMemoryDecisionLog {
    fn record_decision(&self, record: &DecisionRecord) -> ConcordResult<bool> {
        let key = Translation::pair_key(
            &record.source_word_id,
            &record.target_language,
            &record.translated_word,
        );
        let fresh = || LoggedDecision {
            record: record.clone(),
            resolved_seq: None,
        };
        match self.decisions.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(fresh());
                Ok(true)
            }
            Entry::Occupied(mut slot) => {
                let logged = slot.get();
                // A verdict pins the record; until then the latest automatic
                // call is the one a reviewer ends up judging.
                if logged.resolved_seq.is_some()
                    || logged.record.suggested_action == record.suggested_action
                {
                    return Ok(false);
                }
                debug!(
                    source_word_id = %record.source_word_id,
                    translated_word = %record.translated_word,
                    previous = ?logged.record.suggested_action,
                    current = ?record.suggested_action,
                    "decision superseded"
                );
                slot.insert(fresh());
                Ok(true)
            }
        }
    }

    fn resolve_decision(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
        final_action: SuggestedAction,
    ) -> ConcordResult<bool> {
        let key = Translation::pair_key(source_word_id, language, translated_word);
        let Some(mut logged) = self.decisions.get_mut(&key) else {
            return Ok(false);
        };
        // Re-resolving with the same verdict keeps the original position.
        if logged.record.final_action == Some(final_action) {
            return Ok(true);
        }
        logged.record.final_action = Some(final_action);
        logged.record.resolved_at = Some(Utc::now());
        logged.resolved_seq = Some(self.next_seq.fetch_add(1, Ordering::SeqCst));
        debug!(
            source_word_id,
            language,
            suggested = ?logged.record.suggested_action,
            final_action = ?final_action,
            "decision resolved"
        );
        Ok(true)
    }

    fn find_decision(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
    ) -> ConcordResult<Option<DecisionRecord>> {
        let key = Translation::pair_key(source_word_id, language, translated_word);
        Ok(self.decisions.get(&key).map(|d| d.record.clone()))
    }

    fn resolved_outcomes(&self, limit: usize) -> ConcordResult<Vec<DecisionOutcome>> {
        let mut resolved: Vec<(u64, DecisionOutcome)> = self
            .decisions
            .iter()
            .filter_map(|d| Some((d.resolved_seq?, d.record.outcome()?)))
            .collect();
        resolved.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(resolved
            .into_iter()
            .take(limit)
            .map(|(_, outcome)| outcome)
            .collect())
    }
}
