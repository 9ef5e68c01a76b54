use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Tokens with fewer characters than this are dropped.
    pub min_chars: usize,
    /// Maximum keywords kept per input batch, in first-seen order.
    pub max_keywords: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_chars: defaults::DEFAULT_MIN_KEYWORD_CHARS,
            max_keywords: defaults::DEFAULT_MAX_KEYWORDS,
        }
    }
}
