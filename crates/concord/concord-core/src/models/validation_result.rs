use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SuggestedAction;

/// Manual verdict on a translation or suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ValidationAction {
    Merge,
    Separate,
}

impl From<ValidationAction> for SuggestedAction {
    fn from(action: ValidationAction) -> Self {
        match action {
            ValidationAction::Merge => SuggestedAction::Merge,
            ValidationAction::Separate => SuggestedAction::Separate,
        }
    }
}

/// Produced once per adjudication, automatic or manual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub success: bool,
    pub action: SuggestedAction,
    pub message: String,
    pub final_confidence: Option<f64>,
    pub affected_translations: Option<usize>,
    /// Translation the adjudication created or touched.
    pub translation_id: Option<String>,
}
