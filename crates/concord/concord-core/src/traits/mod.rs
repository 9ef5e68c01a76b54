pub mod decision_log;
pub mod translation_store;
pub mod vote_store;
pub mod word_index;

pub use decision_log::IDecisionLog;
pub use translation_store::{ISuggestionStore, ITranslationStore};
pub use vote_store::IVoteStore;
pub use word_index::IWordIndex;
