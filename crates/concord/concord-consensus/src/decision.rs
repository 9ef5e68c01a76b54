//! Score → merge / separate / uncertain.

use std::sync::RwLock;

use tracing::info;

use concord_core::errors::ConcordResult;
use concord_core::models::{SuggestedAction, Thresholds};

/// Pure decision over (score, thresholds).
///
/// `score >= auto_merge` merges, `score < auto_separate` separates, anything
/// in between is escalated. `ask_user` never changes the outcome.
pub fn decide(score: f64, thresholds: &Thresholds) -> SuggestedAction {
    if score >= thresholds.auto_merge {
        SuggestedAction::Merge
    } else if score < thresholds.auto_separate {
        SuggestedAction::Separate
    } else {
        SuggestedAction::Uncertain
    }
}

/// Where an uncertain score sits relative to `ask_user`. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryBand {
    /// `ask_user <= score < auto_merge`.
    NearMerge,
    /// `auto_separate <= score < ask_user`.
    NearSeparate,
}

pub fn advisory_band(score: f64, thresholds: &Thresholds) -> Option<AdvisoryBand> {
    match decide(score, thresholds) {
        SuggestedAction::Uncertain if score >= thresholds.ask_user => Some(AdvisoryBand::NearMerge),
        SuggestedAction::Uncertain => Some(AdvisoryBand::NearSeparate),
        _ => None,
    }
}

/// Holds the live threshold set. Replacing it is an explicit call; nothing
/// in the engine rewrites thresholds on its own.
pub struct ConsensusDecisionEngine {
    thresholds: RwLock<Thresholds>,
}

impl ConsensusDecisionEngine {
    pub fn new(thresholds: Thresholds) -> ConcordResult<Self> {
        thresholds.validate()?;
        Ok(Self {
            thresholds: RwLock::new(thresholds),
        })
    }

    /// Snapshot of the live thresholds.
    pub fn thresholds(&self) -> Thresholds {
        // Thresholds is Copy; a poisoned lock still holds a complete value.
        *self
            .thresholds
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Decide against a snapshot, returning the snapshot used.
    pub fn decide(&self, score: f64) -> (SuggestedAction, Thresholds) {
        let thresholds = self.thresholds();
        (decide(score, &thresholds), thresholds)
    }

    /// Validate and swap in a new threshold set. Invalid sets leave the
    /// current one untouched. Returns the previous set.
    pub fn update_thresholds(&self, new: Thresholds) -> ConcordResult<Thresholds> {
        new.validate()?;
        let mut guard = self
            .thresholds
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = *guard;
        *guard = new;
        info!(
            auto_merge = new.auto_merge,
            ask_user = new.ask_user,
            auto_separate = new.auto_separate,
            previous_auto_merge = previous.auto_merge,
            previous_auto_separate = previous.auto_separate,
            "decision thresholds updated"
        );
        Ok(previous)
    }
}

impl Default for ConsensusDecisionEngine {
    fn default() -> Self {
        Self {
            thresholds: RwLock::new(Thresholds::default()),
        }
    }
}
