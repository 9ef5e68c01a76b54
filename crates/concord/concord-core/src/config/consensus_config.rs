use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Thresholds;

/// Initial decision thresholds. The live set can be replaced at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusConfig {
    pub auto_merge: f64,
    pub ask_user: f64,
    pub auto_separate: f64,
}

impl ConsensusConfig {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            auto_merge: self.auto_merge,
            ask_user: self.ask_user,
            auto_separate: self.auto_separate,
        }
    }
}

impl Default for ConsensusConfig {
    fn default() -> Self {
        Self {
            auto_merge: defaults::DEFAULT_AUTO_MERGE,
            ask_user: defaults::DEFAULT_ASK_USER,
            auto_separate: defaults::DEFAULT_AUTO_SEPARATE,
        }
    }
}
