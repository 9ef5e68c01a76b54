use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{primary_subtag, Confidence};

/// Provenance of a translation's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ValidationType {
    /// Decided by the engine.
    Auto,
    /// Decided by a human.
    Manual,
    /// Adjusted from accumulated vote feedback.
    Learned,
}

/// A persisted translation. Never deleted; a human `separate` verdict zeroes
/// its confidence instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Translation {
    pub id: String,
    pub source_word_id: String,
    /// Target language code.
    pub language: String,
    pub translated_word: String,
    pub context: Vec<String>,
    pub confidence: Confidence,
    /// Running vote total, written only by the vote ledger.
    pub votes: i64,
    pub validation_type: ValidationType,
    pub target_word_id: Option<String>,
    pub created_by: String,
    pub validated_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Translation {
    /// Confirmed translations block duplicates and are surfaced as candidates.
    pub fn is_confirmed(&self) -> bool {
        !self.confidence.is_rejected()
    }

    /// Case- and whitespace-insensitive form used for conflict detection.
    pub fn normalize_word(word: &str) -> String {
        word.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Content key for the (source word, language, translated word) triple.
    /// Regional variants share a key: `en-GB` and `en` collide.
    pub fn pair_key(source_word_id: &str, language: &str, translated_word: &str) -> String {
        let material = format!(
            "{}\u{1f}{}\u{1f}{}",
            source_word_id,
            primary_subtag(language).to_lowercase(),
            Self::normalize_word(translated_word)
        );
        blake3::hash(material.as_bytes()).to_hex().to_string()
    }

    pub fn key(&self) -> String {
        Self::pair_key(&self.source_word_id, &self.language, &self.translated_word)
    }
}
