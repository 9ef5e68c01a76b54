//! Fixed multi-language stopword list.
//!
//! Bump [`STOPWORDS_VERSION`] whenever the list changes: keyword sets, and
//! therefore similarity scores, are only reproducible for a given version.

use std::collections::HashSet;
use std::sync::LazyLock;

pub const STOPWORDS_VERSION: &str = "2024.1";

const STOPWORDS: &[&str] = &[
    // English
    "about", "above", "after", "again", "also", "another", "because", "been", "before", "being",
    "between", "both", "could", "does", "doing", "down", "during", "each", "every", "from",
    "further", "have", "having", "here", "into", "itself", "just", "more", "most", "much",
    "must", "only", "other", "over", "same", "should", "some", "such", "than", "that", "their",
    "them", "then", "there", "these", "they", "this", "those", "through", "under", "until",
    "very", "were", "what", "when", "where", "which", "while", "with", "would", "your",
    "used", "using", "usually", "something", "someone", "thing", "things", "kind", "type",
    // French
    "alors", "aussi", "autre", "autres", "avec", "avoir", "cela", "celle", "celui", "cette",
    "ceux", "chez", "comme", "dans", "depuis", "donc", "elle", "elles", "encore", "entre",
    "être", "leur", "leurs", "mais", "même", "nous", "pour", "quand", "quel", "quelle",
    "quelque", "sans", "sont", "sous", "tous", "tout", "toute", "toutes", "très", "vers",
    "votre", "vous", "chose", "genre",
    // Spanish
    "algo", "algún", "alguna", "ante", "como", "con", "cual", "cuando", "desde", "donde",
    "durante", "ella", "ellos", "entre", "esta", "este", "esto", "hasta", "mucho", "muy",
    "nosotros", "otro", "otra", "para", "pero", "porque", "sobre", "también", "tiene",
    "todo", "todos", "usted",
    // German
    "aber", "alle", "als", "auch", "dass", "dein", "denn", "diese", "dieser", "doch", "durch",
    "eine", "einem", "einen", "einer", "eines", "haben", "hier", "ihre", "immer", "jede",
    "kann", "mehr", "nach", "nicht", "noch", "oder", "ohne", "schon", "sehr", "sein",
    "seine", "sich", "sind", "über", "unter", "viel", "wenn", "werden", "wird", "zwischen",
    // Italian / Portuguese
    "alla", "anche", "come", "dalla", "della", "delle", "degli", "dove", "essere", "loro",
    "molto", "nella", "perché", "questo", "quello", "sono", "sulla", "uma", "pelo", "pela",
    "isso", "isto", "mais", "muito", "você",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Whether a lower-cased token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_several_languages() {
        assert!(is_stopword("which"));
        assert!(is_stopword("avec"));
        assert!(is_stopword("porque"));
        assert!(is_stopword("nicht"));
    }

    #[test]
    fn accented_entries_match_lowercase_tokens() {
        assert!(is_stopword("très"));
        assert!(is_stopword("über"));
        assert!(!is_stopword("félin"));
    }
}
