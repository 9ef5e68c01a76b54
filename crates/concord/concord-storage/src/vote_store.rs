//! Append-only vote storage, one entry lock per translation.

use dashmap::DashMap;

use concord_core::errors::ConcordResult;
use concord_core::models::VoteRecord;
use concord_core::traits::IVoteStore;

pub struct InMemoryVoteStore {
    votes: DashMap<String, Vec<VoteRecord>>,
}

impl InMemoryVoteStore {
    pub fn new() -> Self {
        Self {
            votes: DashMap::new(),
        }
    }
}

impl Default for InMemoryVoteStore {
    fn default() -> Self {
        Self::new()
    }
}

fn total(records: &[VoteRecord]) -> i64 {
    records.iter().map(|r| r.value.delta()).sum()
}

impl IVoteStore for InMemoryVoteStore {
    fn try_insert(&self, record: &VoteRecord) -> ConcordResult<Option<i64>> {
        // The entry guard serializes voters on the same translation.
        let mut records = self
            .votes
            .entry(record.translation_id.clone())
            .or_default();
        if records.iter().any(|r| r.voter_id == record.voter_id) {
            return Ok(None);
        }
        records.push(record.clone());
        Ok(Some(total(&records)))
    }

    fn vote_total(&self, translation_id: &str) -> ConcordResult<i64> {
        Ok(self
            .votes
            .get(translation_id)
            .map(|r| total(&r))
            .unwrap_or(0))
    }

    fn votes_for(&self, translation_id: &str) -> ConcordResult<Vec<VoteRecord>> {
        Ok(self
            .votes
            .get(translation_id)
            .map(|r| r.clone())
            .unwrap_or_default())
    }
}
