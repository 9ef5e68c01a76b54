//! TranslationEngine: discovery, adjudication, voting, and learning behind
//! one facade.
//!
//! Word-index calls run on the blocking pool under `index_timeout_ms`.
//! Everything else is in-process and synchronous.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use concord_consensus::{
    advisory_band, ConsensusDecisionEngine, LearningInsightsAggregator, VoteLedger,
};
use concord_core::config::ConcordConfig;
use concord_core::constants::{MAX_CANDIDATES, MAX_INSIGHTS_WINDOW, SYSTEM_ACTOR};
use concord_core::errors::{ConcordError, ConcordResult, IndexError};
use concord_core::models::{
    Confidence, DecisionRecord, LearningInsights, SuggestedAction, SuggestionStatus,
    ThresholdUpdate, Thresholds, Translation, TranslationCandidate, TranslationSuggestion,
    ValidationAction, ValidationResult, ValidationType, VoteTally, VoteValue, Word,
};
use concord_core::traits::{IDecisionLog, ISuggestionStore, ITranslationStore, IWordIndex};
use concord_discovery::{
    CandidateFinder, KeywordExtractor, ScoredCandidate, SimilarityEvidence, SimilarityScorer,
};

use crate::backends::EngineBackends;

/// Learned adjustments never take a translation down to rejected.
const LEARNED_CONFIDENCE_FLOOR: f64 = 0.01;

pub struct TranslationEngine {
    config: ConcordConfig,
    finder: Arc<CandidateFinder>,
    decisions: ConsensusDecisionEngine,
    ledger: VoteLedger,
    insights: LearningInsightsAggregator,
    translations: Arc<dyn ITranslationStore>,
    suggestions: Arc<dyn ISuggestionStore>,
    decision_log: Arc<dyn IDecisionLog>,
    index_timeout: Duration,
}

impl TranslationEngine {
    /// Build an engine. Fails with `InvalidThreshold` when the configured
    /// thresholds are inconsistent.
    pub fn new(config: ConcordConfig, backends: EngineBackends) -> ConcordResult<Self> {
        let decisions = ConsensusDecisionEngine::new(config.consensus.thresholds())?;
        let scorer = SimilarityScorer::new(KeywordExtractor::new(&config.keywords));
        let cache = backends.resolve_cache(&config.cache);
        let finder = CandidateFinder::new(
            Arc::clone(&backends.index),
            scorer,
            cache,
            &config.discovery,
        );
        let ledger = VoteLedger::new(
            Arc::clone(&backends.votes),
            Arc::clone(&backends.translations),
        );

        info!(
            max_candidates = config.discovery.max_candidates,
            index_timeout_ms = config.discovery.index_timeout_ms,
            cache_enabled = config.cache.enabled,
            "translation engine initialized"
        );

        Ok(Self {
            finder: Arc::new(finder),
            decisions,
            ledger,
            insights: LearningInsightsAggregator::new(config.insights.clone()),
            translations: backends.translations,
            suggestions: backends.suggestions,
            decision_log: backends.decisions,
            index_timeout: Duration::from_millis(config.discovery.index_timeout_ms),
            config,
        })
    }

    /// Engine over in-process stores and the given word index.
    pub fn in_memory(
        config: ConcordConfig,
        index: Arc<dyn IWordIndex>,
    ) -> ConcordResult<Self> {
        Self::new(config, EngineBackends::in_memory(index))
    }

    pub fn config(&self) -> &ConcordConfig {
        &self.config
    }

    pub fn thresholds(&self) -> Thresholds {
        self.decisions.thresholds()
    }

    // ---------------------------------------------------------------------
    // Discovery
    // ---------------------------------------------------------------------

    /// Candidates for `source_word_id` in `target_language`.
    ///
    /// Confirmed translations for the pair come back as `merge` candidates
    /// carrying their id and validation type. Newly discovered words are
    /// decided on the spot: merges are persisted as `auto` translations,
    /// uncertain ones queue a suggestion, separations are dropped.
    pub async fn search_suggestions(
        &self,
        source_word_id: &str,
        target_language: &str,
        search_term: Option<&str>,
    ) -> ConcordResult<Vec<TranslationCandidate>> {
        let target_language = require_language(target_language)?;
        let source = self.fetch_word(source_word_id).await?;

        let found = {
            let source = source.clone();
            let language = target_language.to_string();
            let query = search_term.map(str::to_string);
            self.with_index(move |finder| finder.find_scored(&source, &language, query.as_deref()))
                .await?
        };

        let mut known: HashMap<String, Translation> = self
            .translations
            .translations_for(&source.id, Some(target_language))?
            .into_iter()
            .map(|t| (t.key(), t))
            .collect();
        let mut surfaced = HashSet::new();
        let mut candidates = Vec::new();

        for scored in found {
            let key = Translation::pair_key(&source.id, target_language, &scored.word.text);
            if !surfaced.insert(key.clone()) {
                continue;
            }
            if let Some(existing) = known.remove(&key) {
                // A rejected pair stays rejected until a human says otherwise.
                if existing.is_confirmed() {
                    candidates.push(persisted_candidate(&existing, Some(&scored.evidence)));
                }
                continue;
            }
            if let Some(candidate) = self.adjudicate(&source, target_language, scored)? {
                candidates.push(candidate);
            }
        }

        candidates.extend(
            known
                .into_values()
                .filter(|t| t.is_confirmed())
                .map(|t| persisted_candidate(&t, None)),
        );

        candidates.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.translated_word.cmp(&b.translated_word))
        });
        candidates.truncate(self.config.discovery.max_candidates.min(MAX_CANDIDATES));

        info!(
            source_word_id = %source.id,
            target_language,
            count = candidates.len(),
            "suggestions searched"
        );
        Ok(candidates)
    }

    /// Languages other than the word's own in which the index has a match.
    pub async fn available_languages(&self, word_id: &str) -> ConcordResult<Vec<String>> {
        let id = word_id.to_string();
        self.with_index(move |finder| {
            let word = finder.get_word(&id)?;
            finder.available_languages(&word)
        })
        .await
    }

    pub fn pending_suggestions(
        &self,
        source_word_id: &str,
    ) -> ConcordResult<Vec<TranslationSuggestion>> {
        self.suggestions.pending_suggestions(source_word_id)
    }

    pub fn get_translation(&self, translation_id: &str) -> ConcordResult<Translation> {
        self.translations
            .get_translation(translation_id)?
            .ok_or_else(|| ConcordError::TranslationNotFound {
                id: translation_id.to_string(),
            })
    }

    // ---------------------------------------------------------------------
    // Manual adjudication
    // ---------------------------------------------------------------------

    /// Persist a human-submitted translation.
    ///
    /// Fails with `Conflict` when a confirmed translation already holds the
    /// pair. Resolves any logged automatic decision for the pair as `merge`
    /// and accepts a pending suggestion for it.
    pub async fn create_translation(
        &self,
        source_word_id: &str,
        target_language: &str,
        translated_word: &str,
        context: Vec<String>,
        created_by: &str,
    ) -> ConcordResult<ValidationResult> {
        let target_language = require_language(target_language)?;
        let translated_word = translated_word.trim();
        if translated_word.is_empty() {
            return Err(ConcordError::InvalidWord {
                reason: "translated word is empty".to_string(),
            });
        }

        let source = self.fetch_word(source_word_id).await?;

        if let Some(existing) =
            self.translations
                .find_translation(&source.id, target_language, translated_word)?
        {
            if existing.is_confirmed() {
                return Err(conflict(&existing));
            }
        }

        let target = {
            let language = target_language.to_string();
            let text = translated_word.to_string();
            self.with_index(move |finder| finder.find_exact(&language, &text))
                .await?
        };
        let score = target
            .as_ref()
            .map(|word| self.finder.scorer().score(&source, word).score);

        let now = Utc::now();
        let translation = Translation {
            id: Uuid::new_v4().to_string(),
            source_word_id: source.id.clone(),
            language: target_language.to_string(),
            translated_word: translated_word.to_string(),
            context,
            confidence: manual_confidence(score),
            votes: 0,
            validation_type: ValidationType::Manual,
            target_word_id: target.map(|w| w.id),
            created_by: created_by.to_string(),
            validated_by: Some(created_by.to_string()),
            created_at: now,
            updated_at: now,
        };
        self.translations.insert_translation(&translation)?;

        self.resolve(
            &source.id,
            target_language,
            translated_word,
            ValidationAction::Merge,
        )?;
        self.settle_pending(&source.id, target_language, translated_word, &translation.id)?;

        info!(
            translation_id = %translation.id,
            source_word_id = %source.id,
            target_language,
            translated_word,
            created_by,
            confidence = %translation.confidence,
            "translation created"
        );

        Ok(ValidationResult {
            success: true,
            action: SuggestedAction::Merge,
            message: format!("translation '{translated_word}' created"),
            final_confidence: Some(translation.confidence.value()),
            affected_translations: Some(1),
            translation_id: Some(translation.id),
        })
    }

    /// Apply a human verdict to a translation or a suggestion.
    ///
    /// Idempotent: repeating a verdict reports zero affected translations.
    /// `separate` on a translation zeroes its confidence; `merge` on a
    /// suggestion creates the translation with `validation_type = manual`.
    pub fn validate_translation(
        &self,
        translation_id: &str,
        action: ValidationAction,
        reason: Option<&str>,
        validator: &str,
    ) -> ConcordResult<ValidationResult> {
        if let Some(translation) = self.translations.get_translation(translation_id)? {
            return self.validate_persisted(translation, action, reason, validator);
        }
        if let Some(suggestion) = self.suggestions.get_suggestion(translation_id)? {
            return self.validate_suggestion(suggestion, action, reason, validator);
        }
        Err(ConcordError::TranslationNotFound {
            id: translation_id.to_string(),
        })
    }

    fn validate_persisted(
        &self,
        mut translation: Translation,
        action: ValidationAction,
        reason: Option<&str>,
        validator: &str,
    ) -> ConcordResult<ValidationResult> {
        let before = (
            translation.confidence,
            translation.validation_type,
            translation.validated_by.clone(),
        );

        match action {
            ValidationAction::Merge => {
                if !translation.is_confirmed() {
                    // Restoring must not shadow a newer confirmed record.
                    if let Some(current) = self.translations.find_translation(
                        &translation.source_word_id,
                        &translation.language,
                        &translation.translated_word,
                    )? {
                        if current.id != translation.id && current.is_confirmed() {
                            return Err(conflict(&current));
                        }
                    }
                    translation.confidence = manual_confidence(None);
                }
            }
            ValidationAction::Separate => {
                translation.confidence = Confidence::new(Confidence::REJECTED);
            }
        }
        translation.validation_type = ValidationType::Manual;
        translation.validated_by = Some(validator.to_string());

        let changed = (
            translation.confidence,
            translation.validation_type,
            translation.validated_by.clone(),
        ) != before;
        if changed {
            translation.updated_at = Utc::now();
            self.translations.update_translation(&translation)?;
        }
        self.resolve(
            &translation.source_word_id,
            &translation.language,
            &translation.translated_word,
            action,
        )?;

        info!(
            translation_id = %translation.id,
            action = ?action,
            validator,
            reason = reason.unwrap_or(""),
            changed,
            "translation validated"
        );

        Ok(ValidationResult {
            success: true,
            action: action.into(),
            message: verdict_message(action, &translation.translated_word, reason),
            final_confidence: Some(translation.confidence.value()),
            affected_translations: Some(usize::from(changed)),
            translation_id: Some(translation.id),
        })
    }

    fn validate_suggestion(
        &self,
        mut suggestion: TranslationSuggestion,
        action: ValidationAction,
        reason: Option<&str>,
        validator: &str,
    ) -> ConcordResult<ValidationResult> {
        match (suggestion.status, action) {
            (SuggestionStatus::Accepted, ValidationAction::Separate) => {
                // An accepted suggestion is judged through its translation.
                let translation_id = suggestion.translation_id.clone().ok_or_else(|| {
                    ConcordError::TranslationNotFound {
                        id: suggestion.id.clone(),
                    }
                })?;
                let translation = self.get_translation(&translation_id)?;
                self.validate_persisted(translation, action, reason, validator)
            }
            (SuggestionStatus::Accepted, ValidationAction::Merge)
            | (SuggestionStatus::Rejected, ValidationAction::Separate) => {
                debug!(suggestion_id = %suggestion.id, action = ?action, "suggestion already resolved");
                Ok(ValidationResult {
                    success: true,
                    action: action.into(),
                    message: verdict_message(action, &suggestion.translated_word, reason),
                    final_confidence: None,
                    affected_translations: Some(0),
                    translation_id: suggestion.translation_id,
                })
            }
            (SuggestionStatus::Pending, ValidationAction::Separate) => {
                suggestion.status = SuggestionStatus::Rejected;
                self.suggestions.update_suggestion(&suggestion)?;
                self.resolve(
                    &suggestion.source_word_id,
                    &suggestion.target_language,
                    &suggestion.translated_word,
                    action,
                )?;
                info!(
                    suggestion_id = %suggestion.id,
                    validator,
                    reason = reason.unwrap_or(""),
                    "suggestion rejected"
                );
                Ok(ValidationResult {
                    success: true,
                    action: action.into(),
                    message: verdict_message(action, &suggestion.translated_word, reason),
                    final_confidence: None,
                    affected_translations: Some(0),
                    translation_id: None,
                })
            }
            (SuggestionStatus::Pending | SuggestionStatus::Rejected, ValidationAction::Merge) => {
                let (translation, created) = self.accept_suggestion(&suggestion, validator)?;
                suggestion.status = SuggestionStatus::Accepted;
                suggestion.translation_id = Some(translation.id.clone());
                self.suggestions.update_suggestion(&suggestion)?;
                self.resolve(
                    &suggestion.source_word_id,
                    &suggestion.target_language,
                    &suggestion.translated_word,
                    action,
                )?;
                info!(
                    suggestion_id = %suggestion.id,
                    translation_id = %translation.id,
                    validator,
                    created,
                    "suggestion accepted"
                );
                Ok(ValidationResult {
                    success: true,
                    action: action.into(),
                    message: verdict_message(action, &suggestion.translated_word, reason),
                    final_confidence: Some(translation.confidence.value()),
                    affected_translations: Some(usize::from(created)),
                    translation_id: Some(translation.id),
                })
            }
        }
    }

    /// Materialize an accepted suggestion. When a confirmed translation
    /// already holds the pair, that record is returned instead.
    fn accept_suggestion(
        &self,
        suggestion: &TranslationSuggestion,
        validator: &str,
    ) -> ConcordResult<(Translation, bool)> {
        let now = Utc::now();
        let translation = Translation {
            id: Uuid::new_v4().to_string(),
            source_word_id: suggestion.source_word_id.clone(),
            language: suggestion.target_language.clone(),
            translated_word: suggestion.translated_word.clone(),
            context: Vec::new(),
            confidence: manual_confidence(Some(suggestion.similarity_score)),
            votes: 0,
            validation_type: ValidationType::Manual,
            target_word_id: suggestion.target_word_id.clone(),
            created_by: SYSTEM_ACTOR.to_string(),
            validated_by: Some(validator.to_string()),
            created_at: now,
            updated_at: now,
        };
        match self.translations.insert_translation(&translation) {
            Ok(()) => Ok((translation, true)),
            Err(err @ ConcordError::Conflict { .. }) => {
                let existing = self
                    .translations
                    .find_translation(
                        &suggestion.source_word_id,
                        &suggestion.target_language,
                        &suggestion.translated_word,
                    )?
                    .ok_or(err)?;
                Ok((existing, false))
            }
            Err(err) => Err(err),
        }
    }

    // ---------------------------------------------------------------------
    // Votes
    // ---------------------------------------------------------------------

    pub fn vote_for_translation(
        &self,
        translation_id: &str,
        voter_id: &str,
        value: VoteValue,
    ) -> ConcordResult<VoteTally> {
        let new_vote_count = self.ledger.cast_vote(translation_id, voter_id, value)?;
        Ok(VoteTally { new_vote_count })
    }

    pub fn vote_count(&self, translation_id: &str) -> ConcordResult<i64> {
        self.ledger.vote_count(translation_id)
    }

    // ---------------------------------------------------------------------
    // Learning
    // ---------------------------------------------------------------------

    /// Insights over the `limit` most recently resolved decisions.
    pub fn get_learning_insights(&self, limit: Option<usize>) -> ConcordResult<LearningInsights> {
        let window = limit
            .unwrap_or(self.config.insights.default_window)
            .min(MAX_INSIGHTS_WINDOW);
        let history = self.decision_log.resolved_outcomes(window)?;
        let insights = self.insights.aggregate(&history, &self.decisions.thresholds());
        debug!(
            window,
            sample_size = insights.sample_size,
            overall_accuracy = insights.overall_accuracy,
            "learning insights computed"
        );
        Ok(insights)
    }

    /// Replace the live thresholds. Invalid sets fail with `InvalidThreshold`
    /// and leave the current ones in place.
    pub fn update_auto_validation_thresholds(
        &self,
        new_thresholds: Thresholds,
    ) -> ConcordResult<ThresholdUpdate> {
        let previous = self.decisions.update_thresholds(new_thresholds)?;
        Ok(ThresholdUpdate {
            success: true,
            message: format!(
                "thresholds updated: merge {:.3} -> {:.3}, ask {:.3} -> {:.3}, separate {:.3} -> {:.3}",
                previous.auto_merge,
                new_thresholds.auto_merge,
                previous.ask_user,
                new_thresholds.ask_user,
                previous.auto_separate,
                new_thresholds.auto_separate,
            ),
        })
    }

    /// Apply the current recommendation through the validated update path.
    pub fn apply_recommended_thresholds(
        &self,
        limit: Option<usize>,
    ) -> ConcordResult<ThresholdUpdate> {
        let insights = self.get_learning_insights(limit)?;
        if insights.recommended_thresholds == self.decisions.thresholds() {
            return Ok(ThresholdUpdate {
                success: true,
                message: format!(
                    "thresholds unchanged over {} resolved decisions",
                    insights.sample_size
                ),
            });
        }
        self.update_auto_validation_thresholds(insights.recommended_thresholds)
    }

    /// Move the confidence of every confirmed translation with
    /// `|votes| >= min_votes` one step in the direction of its vote total,
    /// marking it `learned`.
    pub fn learn_from_votes(&self, min_votes: Option<i64>) -> ConcordResult<ValidationResult> {
        let min_votes = min_votes
            .unwrap_or(self.config.insights.learn_min_votes)
            .max(1);
        let step = self.config.insights.learn_step;
        let mut affected = 0usize;

        for mut translation in self.translations.all_translations()? {
            if !translation.is_confirmed() || translation.votes.abs() < min_votes {
                continue;
            }
            let moved = if translation.votes > 0 {
                translation.confidence + step
            } else {
                translation.confidence - step
            };
            let moved = Confidence::new(moved.value().max(LEARNED_CONFIDENCE_FLOOR));
            if moved == translation.confidence
                && translation.validation_type == ValidationType::Learned
            {
                continue;
            }

            debug!(
                translation_id = %translation.id,
                votes = translation.votes,
                from = %translation.confidence,
                to = %moved,
                "learned confidence adjustment"
            );
            translation.confidence = moved;
            translation.validation_type = ValidationType::Learned;
            translation.updated_at = Utc::now();
            self.translations.update_translation(&translation)?;
            affected += 1;
        }

        info!(affected, min_votes, step, "learned re-validation complete");
        Ok(ValidationResult {
            success: true,
            action: SuggestedAction::Merge,
            message: format!("{affected} translation(s) re-validated from votes"),
            final_confidence: None,
            affected_translations: Some(affected),
            translation_id: None,
        })
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Run a finder call on the blocking pool, bounded by the index timeout.
    async fn with_index<T, F>(&self, call: F) -> ConcordResult<T>
    where
        F: FnOnce(&CandidateFinder) -> ConcordResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let finder = Arc::clone(&self.finder);
        let task = tokio::task::spawn_blocking(move || call(&finder));
        match tokio::time::timeout(self.index_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(IndexError::Unreachable {
                reason: format!("index task failed: {join_error}"),
            }
            .into()),
            Err(_) => {
                let timeout_ms = self.config.discovery.index_timeout_ms;
                warn!(timeout_ms, "word index call timed out");
                Err(IndexError::Timeout { timeout_ms }.into())
            }
        }
    }

    async fn fetch_word(&self, word_id: &str) -> ConcordResult<Word> {
        let id = word_id.to_string();
        self.with_index(move |finder| finder.get_word(&id)).await
    }

    fn adjudicate(
        &self,
        source: &Word,
        target_language: &str,
        scored: ScoredCandidate,
    ) -> ConcordResult<Option<TranslationCandidate>> {
        let prior = self.suggestions.find_suggestion(
            &source.id,
            target_language,
            &scored.word.text,
        )?;
        if prior.is_some_and(|s| s.status == SuggestionStatus::Rejected) {
            // A reviewer already said no; threshold changes do not reopen it.
            debug!(
                source_word_id = %source.id,
                translated_word = %scored.word.text,
                "candidate previously rejected"
            );
            return Ok(None);
        }

        let score = scored.evidence.score;
        let (action, thresholds) = self.decisions.decide(score);
        self.log_decision(source, target_language, &scored, action)?;

        match action {
            SuggestedAction::Merge => self.auto_merge(source, target_language, scored).map(Some),
            SuggestedAction::Uncertain => {
                debug!(
                    source_word_id = %source.id,
                    target_word_id = %scored.word.id,
                    score,
                    band = ?advisory_band(score, &thresholds),
                    "candidate escalated"
                );
                self.escalate(source, target_language, scored)
            }
            SuggestedAction::Separate => {
                debug!(
                    source_word_id = %source.id,
                    target_word_id = %scored.word.id,
                    score,
                    "candidate separated"
                );
                Ok(None)
            }
        }
    }

    fn auto_merge(
        &self,
        source: &Word,
        target_language: &str,
        scored: ScoredCandidate,
    ) -> ConcordResult<TranslationCandidate> {
        let now = Utc::now();
        let translation = Translation {
            id: Uuid::new_v4().to_string(),
            source_word_id: source.id.clone(),
            language: target_language.to_string(),
            translated_word: scored.word.text.clone(),
            context: scored.word.definition_texts().map(str::to_string).collect(),
            confidence: Confidence::new(scored.evidence.score),
            votes: 0,
            validation_type: ValidationType::Auto,
            target_word_id: Some(scored.word.id.clone()),
            created_by: SYSTEM_ACTOR.to_string(),
            validated_by: None,
            created_at: now,
            updated_at: now,
        };

        let persisted = match self.translations.insert_translation(&translation) {
            Ok(()) => {
                info!(
                    translation_id = %translation.id,
                    source_word_id = %source.id,
                    target_language,
                    translated_word = %translation.translated_word,
                    score = scored.evidence.score,
                    "translation auto-merged"
                );
                self.settle_pending(
                    &source.id,
                    target_language,
                    &translation.translated_word,
                    &translation.id,
                )?;
                translation
            }
            Err(err @ ConcordError::Conflict { .. }) => {
                // Lost a race with another writer; surface the winner.
                debug!(translated_word = %translation.translated_word, "auto merge conflicted");
                self.translations
                    .find_translation(&source.id, target_language, &translation.translated_word)?
                    .ok_or(err)?
            }
            Err(err) => return Err(err),
        };
        Ok(persisted_candidate(&persisted, Some(&scored.evidence)))
    }

    fn escalate(
        &self,
        source: &Word,
        target_language: &str,
        scored: ScoredCandidate,
    ) -> ConcordResult<Option<TranslationCandidate>> {
        let suggestion = TranslationSuggestion {
            id: Uuid::new_v4().to_string(),
            source_word_id: source.id.clone(),
            target_word_id: Some(scored.word.id.clone()),
            target_language: target_language.to_string(),
            translated_word: scored.word.text.clone(),
            similarity_score: scored.evidence.score,
            shared_keywords: scored.evidence.shared_keywords.clone(),
            same_category: scored.evidence.same_category,
            status: SuggestionStatus::Pending,
            created_at: Utc::now(),
            translation_id: None,
        };
        let stored = self.suggestions.insert_suggestion_if_absent(&suggestion)?;
        if !stored.is_pending() {
            return Ok(None);
        }
        if stored.id == suggestion.id {
            info!(
                suggestion_id = %stored.id,
                source_word_id = %source.id,
                translated_word = %stored.translated_word,
                "suggestion queued for review"
            );
        }

        let mut candidate = discovered_candidate(
            &source.id,
            target_language,
            scored,
            SuggestedAction::Uncertain,
        );
        candidate.suggestion_id = Some(stored.id);
        Ok(Some(candidate))
    }

    /// Mark a still-pending suggestion for the pair as accepted into
    /// `translation_id`.
    fn settle_pending(
        &self,
        source_word_id: &str,
        target_language: &str,
        translated_word: &str,
        translation_id: &str,
    ) -> ConcordResult<()> {
        let Some(mut suggestion) =
            self.suggestions
                .find_suggestion(source_word_id, target_language, translated_word)?
        else {
            return Ok(());
        };
        if suggestion.is_pending() {
            suggestion.status = SuggestionStatus::Accepted;
            suggestion.translation_id = Some(translation_id.to_string());
            self.suggestions.update_suggestion(&suggestion)?;
            debug!(suggestion_id = %suggestion.id, translation_id, "pending suggestion settled");
        }
        Ok(())
    }

    fn log_decision(
        &self,
        source: &Word,
        target_language: &str,
        scored: &ScoredCandidate,
        action: SuggestedAction,
    ) -> ConcordResult<()> {
        let record = DecisionRecord {
            id: Uuid::new_v4().to_string(),
            source_word_id: source.id.clone(),
            target_word_id: Some(scored.word.id.clone()),
            target_language: target_language.to_string(),
            translated_word: scored.word.text.clone(),
            suggested_action: action,
            similarity_score: scored.evidence.score,
            same_category: scored.evidence.same_category,
            has_shared_keywords: scored.evidence.has_shared_keywords(),
            final_action: None,
            decided_at: Utc::now(),
            resolved_at: None,
        };
        self.decision_log.record_decision(&record)?;
        Ok(())
    }

    fn resolve(
        &self,
        source_word_id: &str,
        language: &str,
        translated_word: &str,
        action: ValidationAction,
    ) -> ConcordResult<()> {
        let resolved = self.decision_log.resolve_decision(
            source_word_id,
            language,
            translated_word,
            action.into(),
        )?;
        if resolved {
            debug!(source_word_id, language, translated_word, action = ?action, "decision resolved");
        }
        Ok(())
    }
}

fn require_language(language: &str) -> ConcordResult<&str> {
    let language = language.trim();
    if language.is_empty() {
        return Err(ConcordError::InvalidWord {
            reason: "target language is empty".to_string(),
        });
    }
    Ok(language)
}

/// Human-approved confidence: the similarity score, floored at the manual default.
fn manual_confidence(score: Option<f64>) -> Confidence {
    Confidence::new(score.map_or(Confidence::MANUAL_DEFAULT, |s| {
        s.max(Confidence::MANUAL_DEFAULT)
    }))
}

fn conflict(existing: &Translation) -> ConcordError {
    ConcordError::Conflict {
        source_word_id: existing.source_word_id.clone(),
        target_language: existing.language.clone(),
        translated_word: existing.translated_word.clone(),
    }
}

fn verdict_message(action: ValidationAction, translated_word: &str, reason: Option<&str>) -> String {
    let verdict = match action {
        ValidationAction::Merge => "merged",
        ValidationAction::Separate => "separated",
    };
    match reason.map(str::trim).filter(|r| !r.is_empty()) {
        Some(reason) => format!("'{translated_word}' {verdict}: {reason}"),
        None => format!("'{translated_word}' {verdict}"),
    }
}

fn persisted_candidate(
    translation: &Translation,
    evidence: Option<&SimilarityEvidence>,
) -> TranslationCandidate {
    TranslationCandidate {
        source_word_id: translation.source_word_id.clone(),
        target_word_id: translation.target_word_id.clone(),
        target_language: translation.language.clone(),
        translated_word: translation.translated_word.clone(),
        similarity_score: translation.confidence.value(),
        shared_keywords: evidence
            .map(|e| e.shared_keywords.clone())
            .unwrap_or_default(),
        same_category: evidence.is_some_and(|e| e.same_category),
        suggested_action: SuggestedAction::Merge,
        translation_id: Some(translation.id.clone()),
        validation_type: Some(translation.validation_type),
        suggestion_id: None,
    }
}

fn discovered_candidate(
    source_word_id: &str,
    target_language: &str,
    scored: ScoredCandidate,
    action: SuggestedAction,
) -> TranslationCandidate {
    TranslationCandidate {
        source_word_id: source_word_id.to_string(),
        target_word_id: Some(scored.word.id),
        target_language: target_language.to_string(),
        translated_word: scored.word.text,
        similarity_score: scored.evidence.score,
        shared_keywords: scored.evidence.shared_keywords,
        same_category: scored.evidence.same_category,
        suggested_action: action,
        translation_id: None,
        validation_type: None,
        suggestion_id: None,
    }
}
