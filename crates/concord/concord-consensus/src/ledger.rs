//! VoteLedger: one immutable vote per (translation, voter), no self-votes.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use concord_core::errors::{ConcordError, ConcordResult, VoteError};
use concord_core::models::{VoteRecord, VoteValue};
use concord_core::traits::{ITranslationStore, IVoteStore};

/// The only writer of translation vote totals.
///
/// Votes are an independent signal: the ledger never touches confidence.
pub struct VoteLedger {
    votes: Arc<dyn IVoteStore>,
    translations: Arc<dyn ITranslationStore>,
}

impl VoteLedger {
    pub fn new(votes: Arc<dyn IVoteStore>, translations: Arc<dyn ITranslationStore>) -> Self {
        Self {
            votes,
            translations,
        }
    }

    /// Record a vote and return the new total.
    ///
    /// Rejections (`SelfVote`, `DuplicateVote`, unknown translation) leave
    /// both stores untouched.
    pub fn cast_vote(
        &self,
        translation_id: &str,
        voter_id: &str,
        value: VoteValue,
    ) -> ConcordResult<i64> {
        let translation = self
            .translations
            .get_translation(translation_id)?
            .ok_or_else(|| ConcordError::TranslationNotFound {
                id: translation_id.to_string(),
            })?;

        if translation.created_by == voter_id {
            debug!(translation_id, voter_id, "self vote rejected");
            return Err(VoteError::SelfVote {
                translation_id: translation_id.to_string(),
                voter_id: voter_id.to_string(),
            }
            .into());
        }

        let record = VoteRecord {
            translation_id: translation_id.to_string(),
            voter_id: voter_id.to_string(),
            value,
            cast_at: Utc::now(),
        };

        let Some(total) = self.votes.try_insert(&record)? else {
            debug!(translation_id, voter_id, "duplicate vote rejected");
            return Err(VoteError::DuplicateVote {
                translation_id: translation_id.to_string(),
                voter_id: voter_id.to_string(),
            }
            .into());
        };

        self.translations
            .adjust_votes(translation_id, value.delta())?;

        info!(translation_id, voter_id, value = ?value, total, "vote recorded");
        Ok(total)
    }

    /// Sum of all recorded votes for a translation.
    pub fn vote_count(&self, translation_id: &str) -> ConcordResult<i64> {
        self.votes.vote_total(translation_id)
    }

    pub fn votes_for(&self, translation_id: &str) -> ConcordResult<Vec<VoteRecord>> {
        self.votes.votes_for(translation_id)
    }
}
