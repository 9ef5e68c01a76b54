//! # concord-engine
//!
//! The async surface of Concord. `TranslationEngine` wires discovery,
//! threshold decisions, the vote ledger, and learning insights over a set
//! of storage backends, and bounds every word-index call with a timeout.

pub mod backends;
pub mod engine;
pub mod tracing_setup;

pub use backends::EngineBackends;
pub use engine::TranslationEngine;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
