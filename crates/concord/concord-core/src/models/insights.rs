use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Thresholds;

/// Accuracy of automatic decisions and the thresholds they suggest.
/// Recomputed from history, never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LearningInsights {
    pub category_accuracy: f64,
    pub semantic_accuracy: f64,
    pub overall_accuracy: f64,
    pub recommended_thresholds: Thresholds,
    pub common_patterns: Vec<CommonPattern>,
    /// Resolved decisions considered.
    pub sample_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommonPattern {
    pub pattern: String,
    pub accuracy: f64,
    pub count: usize,
}

/// Response to a threshold update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThresholdUpdate {
    pub success: bool,
    pub message: String,
}
