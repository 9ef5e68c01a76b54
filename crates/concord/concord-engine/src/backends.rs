//! Storage backends handed to the engine.

use std::sync::Arc;

use concord_core::config::CacheConfig;
use concord_core::traits::{
    IDecisionLog, ISuggestionStore, ITranslationStore, IVoteStore, IWordIndex,
};
use concord_discovery::{ILanguageCache, NoopLanguageCache, TtlLanguageCache};
use concord_storage::{
    InMemoryDecisionLog, InMemoryTranslationStore, InMemoryVoteStore,
};

/// Every collaborator the engine reads from or writes to.
#[derive(Clone)]
pub struct EngineBackends {
    pub index: Arc<dyn IWordIndex>,
    pub translations: Arc<dyn ITranslationStore>,
    pub suggestions: Arc<dyn ISuggestionStore>,
    pub decisions: Arc<dyn IDecisionLog>,
    pub votes: Arc<dyn IVoteStore>,
    /// Overrides the cache selected from `CacheConfig`.
    pub language_cache: Option<Arc<dyn ILanguageCache>>,
}

impl EngineBackends {
    /// In-process stores around an externally owned word index.
    pub fn in_memory(index: Arc<dyn IWordIndex>) -> Self {
        let store = Arc::new(InMemoryTranslationStore::new());
        Self {
            index,
            translations: store.clone(),
            suggestions: store,
            decisions: Arc::new(InMemoryDecisionLog::new()),
            votes: Arc::new(InMemoryVoteStore::new()),
            language_cache: None,
        }
    }

    pub fn with_language_cache(mut self, cache: Arc<dyn ILanguageCache>) -> Self {
        self.language_cache = Some(cache);
        self
    }

    pub(crate) fn resolve_cache(&self, config: &CacheConfig) -> Arc<dyn ILanguageCache> {
        match &self.language_cache {
            Some(cache) => Arc::clone(cache),
            None if config.enabled => Arc::new(TtlLanguageCache::from_config(config)),
            None => Arc::new(NoopLanguageCache),
        }
    }
}
