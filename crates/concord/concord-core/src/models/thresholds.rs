use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;
use crate::errors::{ConcordError, ConcordResult};

/// Decision thresholds. `ask_user` is advisory and never a decision boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Thresholds {
    pub auto_merge: f64,
    pub ask_user: f64,
    pub auto_separate: f64,
}

impl Thresholds {
    /// Every value must lie in [0, 1] and `auto_separate <= ask_user <= auto_merge`.
    pub fn validate(&self) -> ConcordResult<()> {
        for (name, value) in [
            ("auto_merge", self.auto_merge),
            ("ask_user", self.ask_user),
            ("auto_separate", self.auto_separate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConcordError::InvalidThreshold {
                    reason: format!("{name} = {value} is outside [0, 1]"),
                });
            }
        }
        if self.auto_separate > self.ask_user || self.ask_user > self.auto_merge {
            return Err(ConcordError::InvalidThreshold {
                reason: format!(
                    "expected auto_separate ({}) <= ask_user ({}) <= auto_merge ({})",
                    self.auto_separate, self.ask_user, self.auto_merge
                ),
            });
        }
        Ok(())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            auto_merge: defaults::DEFAULT_AUTO_MERGE,
            ask_user: defaults::DEFAULT_ASK_USER,
            auto_separate: defaults::DEFAULT_AUTO_SEPARATE,
        }
    }
}
