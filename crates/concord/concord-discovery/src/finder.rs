//! CandidateFinder: primary language-scoped lookup, cross-language fallback.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use concord_core::config::DiscoveryConfig;
use concord_core::constants::MAX_CANDIDATES;
use concord_core::errors::{ConcordError, ConcordResult};
use concord_core::models::{primary_subtag, Word};
use concord_core::traits::IWordIndex;

use crate::cache::ILanguageCache;
use crate::scorer::{ScoredCandidate, SimilarityScorer};

/// Finds candidate words for a source word in a target language.
///
/// The primary lookup is scoped to the target language. Only when it yields
/// nothing does the finder scan every language with the same query, keep the
/// hits that are in the target language, and order them by similarity.
/// Index failures surface as `IndexUnavailable`, never as an empty list.
pub struct CandidateFinder {
    index: Arc<dyn IWordIndex>,
    scorer: SimilarityScorer,
    cache: Arc<dyn ILanguageCache>,
    max_candidates: usize,
    parallel_min_batch: usize,
}

impl CandidateFinder {
    pub fn new(
        index: Arc<dyn IWordIndex>,
        scorer: SimilarityScorer,
        cache: Arc<dyn ILanguageCache>,
        config: &DiscoveryConfig,
    ) -> Self {
        Self {
            index,
            scorer,
            cache,
            max_candidates: config.max_candidates.min(MAX_CANDIDATES),
            parallel_min_batch: config.parallel_scoring_min_batch,
        }
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Fetch and validate a word. Missing ids are `WordNotFound`.
    pub fn get_word(&self, id: &str) -> ConcordResult<Word> {
        let word = self
            .index
            .get_word(id)?
            .ok_or_else(|| ConcordError::WordNotFound { id: id.to_string() })?;
        word.validate()?;
        Ok(word)
    }

    /// Candidate words, at most `max_candidates`.
    pub fn find(
        &self,
        source: &Word,
        target_language: &str,
        query: Option<&str>,
    ) -> ConcordResult<Vec<Word>> {
        Ok(self
            .find_scored(source, target_language, query)?
            .into_iter()
            .map(|c| c.word)
            .collect())
    }

    /// Candidate words with their evidence, best score first.
    pub fn find_scored(
        &self,
        source: &Word,
        target_language: &str,
        query: Option<&str>,
    ) -> ConcordResult<Vec<ScoredCandidate>> {
        source.validate()?;
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(source.text.as_str());

        let primary = self
            .index
            .find_words_by_language(Some(target_language), query)?;
        let mut words = self.sanitize(source, target_language, primary);
        let fallback = words.is_empty();

        if fallback {
            debug!(
                source_word_id = %source.id,
                target_language,
                query,
                "primary lookup empty, scanning all languages"
            );
            let broad = self.index.find_words_by_language(None, query)?;
            words = self.sanitize(source, target_language, broad);
        }

        let mut scored = self
            .scorer
            .score_all(source, words, self.parallel_min_batch);
        scored.sort_by(|a, b| {
            b.evidence
                .score
                .partial_cmp(&a.evidence.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.id.cmp(&b.word.id))
        });
        scored.truncate(self.max_candidates);

        debug!(
            source_word_id = %source.id,
            target_language,
            fallback,
            count = scored.len(),
            "candidates found"
        );
        Ok(scored)
    }

    /// Word in `language` whose text matches `text` exactly, ignoring case.
    pub fn find_exact(&self, language: &str, text: &str) -> ConcordResult<Option<Word>> {
        let wanted = text.trim().to_lowercase();
        let hits = self.index.find_words_by_language(Some(language), text.trim())?;
        Ok(hits.into_iter().find(|w| {
            w.validate().is_ok()
                && w.is_in_language(language)
                && w.text.trim().to_lowercase() == wanted
        }))
    }

    /// Languages, other than the word's own, in which the index holds a
    /// lexical match for the word's text. Served from the cache when fresh.
    pub fn available_languages(&self, word: &Word) -> ConcordResult<Vec<String>> {
        if let Some(cached) = self.cache.get(&word.id) {
            return Ok(cached);
        }

        let hits = self.index.find_words_by_language(None, &word.text)?;
        let languages: Vec<String> = hits
            .into_iter()
            .filter(|w| w.validate().is_ok() && w.id != word.id)
            .filter(|w| !w.is_in_language(&word.language))
            .map(|w| primary_subtag(&w.language).to_lowercase())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        self.cache.insert(word.id.clone(), languages.clone());
        Ok(languages)
    }

    /// Drop the source itself, malformed records, duplicates, and words
    /// outside the target language (compared on the primary subtag).
    fn sanitize(&self, source: &Word, target_language: &str, words: Vec<Word>) -> Vec<Word> {
        let mut seen = HashSet::new();
        words
            .into_iter()
            .filter(|w| {
                if let Err(e) = w.validate() {
                    warn!(error = %e, "skipping malformed word from index");
                    return false;
                }
                w.id != source.id
                    && w.is_in_language(target_language)
                    && seen.insert(w.id.clone())
            })
            .collect()
    }
}
