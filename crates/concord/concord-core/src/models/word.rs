use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{ConcordError, ConcordResult};

/// A dictionary entry as read from the external word index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Word {
    pub id: String,
    pub text: String,
    /// Language code, e.g. `fr`, `en`.
    pub language: String,
    pub category_id: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// One sense of a word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Definition {
    pub text: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Word {
    /// Reject records the scorer must never see.
    pub fn validate(&self) -> ConcordResult<()> {
        if self.id.trim().is_empty() {
            return Err(ConcordError::InvalidWord {
                reason: "empty word id".into(),
            });
        }
        if self.text.trim().is_empty() {
            return Err(ConcordError::InvalidWord {
                reason: format!("word {} has empty text", self.id),
            });
        }
        if self.language.trim().is_empty() {
            return Err(ConcordError::InvalidWord {
                reason: format!("word {} has no language code", self.id),
            });
        }
        Ok(())
    }

    /// Definition texts across all meanings, in meaning order.
    pub fn definition_texts(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .flat_map(|m| m.definitions.iter())
            .map(|d| d.text.as_str())
    }

    /// Text length in characters.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the word belongs to `language`, compared on the primary
    /// subtag (`en-GB` belongs to `en`).
    pub fn is_in_language(&self, language: &str) -> bool {
        same_language(&self.language, language)
    }

    /// Category shared with `other`, when both words carry one.
    pub fn shares_category_with(&self, other: &Word) -> bool {
        match (&self.category_id, &other.category_id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Compare two language codes on their primary subtag, ignoring case.
pub fn same_language(a: &str, b: &str) -> bool {
    primary_subtag(a).eq_ignore_ascii_case(primary_subtag(b))
}

/// `en` for `en-GB` or `en_gb`.
pub fn primary_subtag(code: &str) -> &str {
    code.trim()
        .split(|c| c == '-' || c == '_')
        .next()
        .unwrap_or_default()
}
