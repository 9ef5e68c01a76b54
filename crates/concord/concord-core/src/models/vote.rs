use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single up- or down-vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    pub fn delta(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Map a signed transport value (+1 / -1) onto a vote.
    pub fn from_signed(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Up),
            -1 => Some(Self::Down),
            _ => None,
        }
    }
}

/// Immutable once written. One per (translation, voter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoteRecord {
    pub translation_id: String,
    pub voter_id: String,
    pub value: VoteValue,
    pub cast_at: DateTime<Utc>,
}

/// Response to a successful vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VoteTally {
    pub new_vote_count: i64,
}
