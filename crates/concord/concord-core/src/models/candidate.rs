use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ValidationType;

/// Outcome of thresholding a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Treat as a confirmed translation.
    Merge,
    /// Discard the candidate.
    Separate,
    /// Escalate to a human reviewer.
    Uncertain,
}

/// A proposed translation produced by a single discovery request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranslationCandidate {
    pub source_word_id: String,
    /// Unset for persisted translations never linked to a word record.
    pub target_word_id: Option<String>,
    pub target_language: String,
    pub translated_word: String,
    /// Bounded to [0, 1].
    pub similarity_score: f64,
    pub shared_keywords: BTreeSet<String>,
    pub same_category: bool,
    pub suggested_action: SuggestedAction,
    /// Set when the candidate is an already-persisted translation.
    pub translation_id: Option<String>,
    pub validation_type: Option<ValidationType>,
    /// Set when the candidate is awaiting human review.
    pub suggestion_id: Option<String>,
}
