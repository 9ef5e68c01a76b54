//! # concord-storage
//!
//! Reference backends for the Concord storage traits. Word data is owned by
//! an external layer in production; these implementations back tests,
//! fixtures, and single-process deployments. Per-key atomicity comes from
//! `DashMap` entry locks.

pub mod decision_log;
pub mod translation_store;
pub mod vote_store;
pub mod word_index;

pub use decision_log::InMemoryDecisionLog;
pub use translation_store::InMemoryTranslationStore;
pub use vote_store::InMemoryVoteStore;
pub use word_index::InMemoryWordIndex;
