//! # concord-discovery
//!
//! Candidate discovery pipeline: keyword extraction → similarity scoring →
//! index lookup with cross-language fallback. Scoring is pure; the finder is
//! the only component that touches the external word index.

pub mod cache;
pub mod finder;
pub mod keywords;
pub mod scorer;

pub use cache::{ILanguageCache, NoopLanguageCache, TtlLanguageCache};
pub use finder::CandidateFinder;
pub use keywords::KeywordExtractor;
pub use scorer::{ScoredCandidate, SimilarityEvidence, SimilarityScorer};
