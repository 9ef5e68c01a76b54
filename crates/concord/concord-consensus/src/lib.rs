//! # concord-consensus
//!
//! Adjudication side of the engine: threshold decisions over similarity
//! scores, the one-vote-per-user ledger, and the feedback loop that measures
//! how often automatic decisions survive human review.

pub mod decision;
pub mod insights;
pub mod ledger;

pub use decision::{advisory_band, decide, AdvisoryBand, ConsensusDecisionEngine};
pub use insights::LearningInsightsAggregator;
pub use ledger::VoteLedger;
