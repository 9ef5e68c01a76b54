pub mod candidate;
pub mod confidence;
pub mod decision;
pub mod insights;
pub mod suggestion;
pub mod thresholds;
pub mod translation;
pub mod validation_result;
pub mod vote;
pub mod word;

pub use candidate::{SuggestedAction, TranslationCandidate};
pub use confidence::Confidence;
pub use decision::{DecisionOutcome, DecisionRecord};
pub use insights::{CommonPattern, LearningInsights, ThresholdUpdate};
pub use suggestion::{SuggestionStatus, TranslationSuggestion};
pub use thresholds::Thresholds;
pub use translation::{Translation, ValidationType};
pub use validation_result::{ValidationAction, ValidationResult};
pub use vote::{VoteRecord, VoteTally, VoteValue};
pub use word::{primary_subtag, same_language, Definition, Meaning, Word};
