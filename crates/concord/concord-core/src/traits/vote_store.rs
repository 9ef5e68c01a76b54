use crate::errors::ConcordResult;
use crate::models::VoteRecord;

/// Append-only vote storage.
pub trait IVoteStore: Send + Sync {
    /// Compare-and-set on (translation, voter): returns `None` when a vote
    /// already exists, otherwise stores the record and returns the new total.
    fn try_insert(&self, record: &VoteRecord) -> ConcordResult<Option<i64>>;
    fn vote_total(&self, translation_id: &str) -> ConcordResult<i64>;
    fn votes_for(&self, translation_id: &str) -> ConcordResult<Vec<VoteRecord>>;
}
