use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SuggestedAction;

/// Log entry for one automatic decision on a (source word, target word) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionRecord {
    pub id: String,
    pub source_word_id: String,
    pub target_word_id: Option<String>,
    pub target_language: String,
    pub translated_word: String,
    pub suggested_action: SuggestedAction,
    pub similarity_score: f64,
    pub same_category: bool,
    pub has_shared_keywords: bool,
    /// Human verdict; only `Merge` or `Separate` once resolved.
    pub final_action: Option<SuggestedAction>,
    pub decided_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl DecisionRecord {
    /// The resolved tuple consumed by the insights aggregator.
    pub fn outcome(&self) -> Option<DecisionOutcome> {
        self.final_action.map(|final_action| DecisionOutcome {
            suggested_action: self.suggested_action,
            similarity_score: self.similarity_score,
            final_action,
            same_category: self.same_category,
            has_shared_keywords: self.has_shared_keywords,
        })
    }
}

/// (suggested action, score, final human-confirmed action) plus the evidence flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionOutcome {
    pub suggested_action: SuggestedAction,
    pub similarity_score: f64,
    pub final_action: SuggestedAction,
    pub same_category: bool,
    pub has_shared_keywords: bool,
}

impl DecisionOutcome {
    /// Merge and separate are automatic; uncertain is a human escalation.
    pub fn is_automatic(&self) -> bool {
        self.suggested_action != SuggestedAction::Uncertain
    }

    pub fn confirmed(&self) -> bool {
        self.suggested_action == self.final_action
    }
}
