use serde::{Deserialize, Serialize};

use super::defaults;

/// Learning insights and learned re-validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Resolved decisions considered when no explicit limit is given.
    pub default_window: usize,
    /// Amount a recommended threshold moves per recomputation.
    pub nudge_step: f64,
    /// Overturn rate above which a threshold is tightened.
    pub error_tolerance: f64,
    /// Minimum resolved decisions in a band before it influences a threshold.
    pub min_samples: usize,
    /// Minimum distance kept between adjacent recommended thresholds.
    pub min_threshold_gap: f64,
    /// Minimum absolute vote total before votes feed learned re-validation.
    pub learn_min_votes: i64,
    /// Confidence step applied by learned re-validation.
    pub learn_step: f64,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            default_window: defaults::DEFAULT_INSIGHTS_WINDOW,
            nudge_step: defaults::DEFAULT_NUDGE_STEP,
            error_tolerance: defaults::DEFAULT_ERROR_TOLERANCE,
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
            min_threshold_gap: defaults::DEFAULT_MIN_THRESHOLD_GAP,
            learn_min_votes: defaults::DEFAULT_LEARN_MIN_VOTES,
            learn_step: defaults::DEFAULT_LEARN_STEP,
        }
    }
}
