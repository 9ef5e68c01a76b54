//! Additive similarity heuristic over a (source, candidate) word pair.

use std::collections::BTreeSet;

use rayon::prelude::*;

use concord_core::models::Word;

use crate::keywords::KeywordExtractor;

/// Score every pair starts from.
pub const BASE_SCORE: f64 = 0.5;
/// Both words carry the same category.
pub const CATEGORY_BONUS: f64 = 0.3;
/// Definition keyword sets overlap.
pub const KEYWORD_BONUS: f64 = 0.2;
/// Texts differ in length by at most [`LENGTH_TOLERANCE`] characters.
pub const LENGTH_BONUS: f64 = 0.1;
pub const LENGTH_TOLERANCE: usize = 2;

/// Score plus the evidence that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityEvidence {
    /// Clamped to [0, 1].
    pub score: f64,
    pub same_category: bool,
    pub shared_keywords: BTreeSet<String>,
    pub length_match: bool,
}

impl SimilarityEvidence {
    pub fn has_shared_keywords(&self) -> bool {
        !self.shared_keywords.is_empty()
    }
}

/// A candidate word with its evidence.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub word: Word,
    pub evidence: SimilarityEvidence,
}

/// Pure and deterministic: no randomness, no clock, no index access.
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    extractor: KeywordExtractor,
}

impl SimilarityScorer {
    pub fn new(extractor: KeywordExtractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    pub fn score(&self, source: &Word, candidate: &Word) -> SimilarityEvidence {
        let source_keywords = self.extractor.extract_set(source.definition_texts());
        self.score_with_keywords(source, &source_keywords, candidate)
    }

    /// Score a batch against one source, reusing the source keyword set.
    /// Large batches run on the rayon pool; output order matches input order.
    pub fn score_all(
        &self,
        source: &Word,
        candidates: Vec<Word>,
        parallel_min_batch: usize,
    ) -> Vec<ScoredCandidate> {
        let source_keywords = self.extractor.extract_set(source.definition_texts());
        let score_one = |word: Word| {
            let evidence = self.score_with_keywords(source, &source_keywords, &word);
            ScoredCandidate { word, evidence }
        };

        if candidates.len() >= parallel_min_batch {
            candidates.into_par_iter().map(score_one).collect()
        } else {
            candidates.into_iter().map(score_one).collect()
        }
    }

    fn score_with_keywords(
        &self,
        source: &Word,
        source_keywords: &BTreeSet<String>,
        candidate: &Word,
    ) -> SimilarityEvidence {
        let candidate_keywords = self.extractor.extract_set(candidate.definition_texts());
        let shared_keywords: BTreeSet<String> = source_keywords
            .intersection(&candidate_keywords)
            .cloned()
            .collect();

        let same_category = source.shares_category_with(candidate);
        let length_match = source.text_len().abs_diff(candidate.text_len()) <= LENGTH_TOLERANCE;

        let mut sum = BASE_SCORE;
        if same_category {
            sum += CATEGORY_BONUS;
        }
        if !shared_keywords.is_empty() {
            sum += KEYWORD_BONUS;
        }
        if length_match {
            sum += LENGTH_BONUS;
        }

        SimilarityEvidence {
            score: sum.clamp(0.0, 1.0),
            same_category,
            shared_keywords,
            length_match,
        }
    }
}
