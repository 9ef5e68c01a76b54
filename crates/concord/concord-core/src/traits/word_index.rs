use crate::errors::IndexError;
use crate::models::Word;

/// Read-only view of the external word/category storage layer.
pub trait IWordIndex: Send + Sync {
    /// Lexical lookup. `language = None` scans every language.
    /// An empty result is valid; only backend failures are errors.
    fn find_words_by_language(
        &self,
        language: Option<&str>,
        query: &str,
    ) -> Result<Vec<Word>, IndexError>;

    fn get_word(&self, id: &str) -> Result<Option<Word>, IndexError>;
}
