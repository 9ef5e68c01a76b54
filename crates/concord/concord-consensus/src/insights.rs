//! LearningInsightsAggregator: accuracy of automatic decisions and nudged
//! threshold recommendations.
//!
//! Recommendations are advisory. Applying them is a separate, explicit call
//! on the decision engine.

use std::collections::HashMap;

use concord_core::config::InsightsConfig;
use concord_core::models::{
    CommonPattern, DecisionOutcome, LearningInsights, SuggestedAction, Thresholds,
};

pub struct LearningInsightsAggregator {
    config: InsightsConfig,
}

impl LearningInsightsAggregator {
    pub fn new(config: InsightsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InsightsConfig {
        &self.config
    }

    /// Compute insights from resolved outcomes against the live thresholds.
    pub fn aggregate(&self, history: &[DecisionOutcome], current: &Thresholds) -> LearningInsights {
        let automatic: Vec<&DecisionOutcome> =
            history.iter().filter(|o| o.is_automatic()).collect();

        LearningInsights {
            category_accuracy: accuracy(automatic.iter().copied().filter(|o| o.same_category)),
            semantic_accuracy: accuracy(
                automatic.iter().copied().filter(|o| o.has_shared_keywords),
            ),
            overall_accuracy: accuracy(automatic.iter().copied()),
            recommended_thresholds: self.recommend(history, current),
            common_patterns: common_patterns(&automatic),
            sample_size: history.len(),
        }
    }

    /// Nudge each threshold one step toward what reviewers actually decided.
    ///
    /// - Overturned merges above tolerance raise `auto_merge`; uncertain
    ///   scores near merge that reviewers overwhelmingly merged lower it.
    /// - Overturned separations above tolerance lower `auto_separate`;
    ///   uncertain scores near separate that reviewers overwhelmingly
    ///   separated raise it.
    /// - `ask_user` stays put unless it falls outside the new band.
    ///
    /// The result always validates; a move that would squeeze the uncertain
    /// band below twice the minimum gap is dropped.
    pub fn recommend(&self, history: &[DecisionOutcome], current: &Thresholds) -> Thresholds {
        let step = self.config.nudge_step;
        let tolerance = self.config.error_tolerance;
        let min_samples = self.config.min_samples.max(1);
        let gap = self.config.min_threshold_gap;

        let mut auto_merge = current.auto_merge;
        let mut auto_separate = current.auto_separate;

        let merges: Vec<&DecisionOutcome> = history
            .iter()
            .filter(|o| o.suggested_action == SuggestedAction::Merge)
            .collect();
        let near_merge: Vec<&DecisionOutcome> = history
            .iter()
            .filter(|o| {
                o.suggested_action == SuggestedAction::Uncertain
                    && o.similarity_score >= current.ask_user
            })
            .collect();

        if merges.len() >= min_samples && overturn_rate(&merges) > tolerance {
            auto_merge += step;
        } else if near_merge.len() >= min_samples
            && share_resolved_as(&near_merge, SuggestedAction::Merge) >= 1.0 - tolerance
        {
            auto_merge -= step;
        }

        let separates: Vec<&DecisionOutcome> = history
            .iter()
            .filter(|o| o.suggested_action == SuggestedAction::Separate)
            .collect();
        let near_separate: Vec<&DecisionOutcome> = history
            .iter()
            .filter(|o| {
                o.suggested_action == SuggestedAction::Uncertain
                    && o.similarity_score < current.ask_user
            })
            .collect();

        if separates.len() >= min_samples && overturn_rate(&separates) > tolerance {
            auto_separate -= step;
        } else if near_separate.len() >= min_samples
            && share_resolved_as(&near_separate, SuggestedAction::Separate) >= 1.0 - tolerance
        {
            auto_separate += step;
        }

        let auto_merge = round3(auto_merge.clamp(0.0, 1.0));
        let auto_separate = round3(auto_separate.clamp(0.0, 1.0));

        if auto_merge - auto_separate < 2.0 * gap {
            return *current;
        }

        let recommended = Thresholds {
            auto_merge,
            ask_user: round3(current.ask_user.clamp(auto_separate, auto_merge)),
            auto_separate,
        };
        if recommended.validate().is_ok() {
            recommended
        } else {
            *current
        }
    }
}

impl Default for LearningInsightsAggregator {
    fn default() -> Self {
        Self::new(InsightsConfig::default())
    }
}

/// Fraction of outcomes whose suggestion survived review. Zero when empty.
fn accuracy<'a, I>(outcomes: I) -> f64
where
    I: Iterator<Item = &'a DecisionOutcome>,
{
    let (confirmed, total) = outcomes.fold((0usize, 0usize), |(c, t), o| {
        (c + usize::from(o.confirmed()), t + 1)
    });
    if total == 0 {
        0.0
    } else {
        confirmed as f64 / total as f64
    }
}

fn overturn_rate(outcomes: &[&DecisionOutcome]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let overturned = outcomes.iter().filter(|o| !o.confirmed()).count();
    overturned as f64 / outcomes.len() as f64
}

fn share_resolved_as(outcomes: &[&DecisionOutcome], action: SuggestedAction) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let matching = outcomes.iter().filter(|o| o.final_action == action).count();
    matching as f64 / outcomes.len() as f64
}

fn pattern_key(outcome: &DecisionOutcome) -> String {
    let action = match outcome.suggested_action {
        SuggestedAction::Merge => "merge",
        SuggestedAction::Separate => "separate",
        SuggestedAction::Uncertain => "uncertain",
    };
    let evidence = match (outcome.same_category, outcome.has_shared_keywords) {
        (true, true) => "category+keywords",
        (true, false) => "category",
        (false, true) => "keywords",
        (false, false) => "length_or_none",
    };
    format!("{action}:{evidence}")
}

/// Evidence patterns among automatic decisions, most frequent first.
fn common_patterns(automatic: &[&DecisionOutcome]) -> Vec<CommonPattern> {
    let mut groups: HashMap<String, (usize, usize)> = HashMap::new();
    for outcome in automatic {
        let entry = groups.entry(pattern_key(outcome)).or_default();
        entry.0 += usize::from(outcome.confirmed());
        entry.1 += 1;
    }

    let mut patterns: Vec<CommonPattern> = groups
        .into_iter()
        .map(|(pattern, (confirmed, count))| CommonPattern {
            pattern,
            accuracy: confirmed as f64 / count as f64,
            count,
        })
        .collect();
    patterns.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pattern.cmp(&b.pattern)));
    patterns
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
