//! Definition text → bounded keyword set.

pub mod stopwords;

use std::collections::{BTreeSet, HashSet};

use concord_core::config::KeywordConfig;

pub use stopwords::{is_stopword, STOPWORDS_VERSION};

/// Tokenizes definition text into at most `max_keywords` keywords.
///
/// Tokens are split on whitespace and lower-cased. A token survives when it
/// has at least `min_chars` characters, is purely alphabetic (accented letters
/// included), and is not a stopword. Order is first-seen.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    min_chars: usize,
    max_keywords: usize,
}

impl KeywordExtractor {
    pub fn new(config: &KeywordConfig) -> Self {
        Self {
            min_chars: config.min_chars,
            max_keywords: config.max_keywords,
        }
    }

    /// Extract keywords from one input batch.
    pub fn extract<'a, I>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for token in texts.into_iter().flat_map(str::split_whitespace) {
            if keywords.len() >= self.max_keywords {
                break;
            }
            let token = token.to_lowercase();
            if !self.accepts(&token) {
                continue;
            }
            if seen.insert(token.clone()) {
                keywords.push(token);
            }
        }

        keywords
    }

    /// Same as [`extract`](Self::extract), as a set for overlap checks.
    pub fn extract_set<'a, I>(&self, texts: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.extract(texts).into_iter().collect()
    }

    fn accepts(&self, token: &str) -> bool {
        token.chars().count() >= self.min_chars
            && token.chars().all(char::is_alphabetic)
            && !is_stopword(token)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(&KeywordConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_short_and_non_alphabetic_tokens() {
        let kw = KeywordExtractor::default().extract(["a cat, 42 felines! domesticated feline"]);
        assert_eq!(kw, vec!["domesticated", "feline"]);
    }

    #[test]
    fn keeps_accented_words() {
        let kw = KeywordExtractor::default().extract(["petit félin domestique"]);
        assert_eq!(kw, vec!["petit", "félin", "domestique"]);
    }

    #[test]
    fn lowercases_and_dedups_in_first_seen_order() {
        let kw = KeywordExtractor::default().extract(["Feline feline FELINE house", "house mouse"]);
        assert_eq!(kw, vec!["feline", "house", "mouse"]);
    }

    #[test]
    fn filters_stopwords() {
        let kw = KeywordExtractor::default().extract(["which animal lives with people"]);
        assert_eq!(kw, vec!["animal", "lives", "people"]);
    }

    #[test]
    fn caps_batch_at_ten() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let kw = KeywordExtractor::default().extract([text]);
        assert_eq!(kw.len(), 10);
        assert_eq!(kw.first().map(String::as_str), Some("alpha"));
        assert!(!kw.contains(&"kilo".to_string()));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(KeywordExtractor::default().extract(std::iter::empty()).is_empty());
    }
}
