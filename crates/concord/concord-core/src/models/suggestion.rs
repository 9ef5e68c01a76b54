use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    Pending,
    Accepted,
    Rejected,
}

/// An `uncertain` candidate persisted for human review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranslationSuggestion {
    pub id: String,
    pub source_word_id: String,
    pub target_word_id: Option<String>,
    pub target_language: String,
    pub translated_word: String,
    pub similarity_score: f64,
    pub shared_keywords: BTreeSet<String>,
    pub same_category: bool,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
    /// Translation created when the suggestion was accepted.
    pub translation_id: Option<String>,
}

impl TranslationSuggestion {
    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }
}
