use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Maximum candidates returned per request. Capped at `constants::MAX_CANDIDATES`.
    pub max_candidates: usize,
    /// Timeout for a single awaited call to the external word index.
    pub index_timeout_ms: u64,
    /// Batches at least this large are scored on the rayon pool.
    pub parallel_scoring_min_batch: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            index_timeout_ms: defaults::DEFAULT_INDEX_TIMEOUT_MS,
            parallel_scoring_min_batch: defaults::DEFAULT_PARALLEL_SCORING_MIN_BATCH,
        }
    }
}
