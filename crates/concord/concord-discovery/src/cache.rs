//! Read cache for "available target languages for word X".
//!
//! Never the system of record: a miss or an expired entry re-derives from
//! the index. Injected behind [`ILanguageCache`] so tests can disable it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;

use concord_core::config::CacheConfig;

pub trait ILanguageCache: Send + Sync {
    fn get(&self, word_id: &str) -> Option<Vec<String>>;
    fn insert(&self, word_id: String, languages: Vec<String>);
    fn invalidate(&self, word_id: &str);
    fn invalidate_all(&self);
}

/// `moka` cache with a fixed TTL and entry bound, tracking hits and misses.
pub struct TtlLanguageCache {
    cache: Cache<String, Vec<String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TtlLanguageCache {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(Duration::from_secs(config.ttl_secs), config.capacity)
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let total = h + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }
}

impl ILanguageCache for TtlLanguageCache {
    fn get(&self, word_id: &str) -> Option<Vec<String>> {
        match self.cache.get(word_id) {
            Some(v) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(v)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    fn insert(&self, word_id: String, languages: Vec<String>) {
        self.cache.insert(word_id, languages);
    }

    fn invalidate(&self, word_id: &str) {
        self.cache.invalidate(word_id);
    }

    fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

/// Always misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLanguageCache;

impl ILanguageCache for NoopLanguageCache {
    fn get(&self, _word_id: &str) -> Option<Vec<String>> {
        None
    }
    fn insert(&self, _word_id: String, _languages: Vec<String>) {}
    fn invalidate(&self, _word_id: &str) {}
    fn invalidate_all(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = TtlLanguageCache::new(Duration::from_secs(60), 100);
        cache.insert("w1".to_string(), vec!["en".to_string(), "es".to_string()]);
        assert_eq!(
            cache.get("w1"),
            Some(vec!["en".to_string(), "es".to_string()])
        );
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn miss_is_counted() {
        let cache = TtlLanguageCache::new(Duration::from_secs(60), 100);
        assert_eq!(cache.get("nope"), None);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hit_rate(), 0.0);
    }

    #[test]
    fn expired_entries_miss() {
        let cache = TtlLanguageCache::new(Duration::from_millis(20), 100);
        cache.insert("w1".to_string(), vec!["en".to_string()]);
        std::thread::sleep(Duration::from_millis(60));
        assert_eq!(cache.get("w1"), None);
    }

    #[test]
    fn invalidate_removes_entry() {
        let cache = TtlLanguageCache::new(Duration::from_secs(60), 100);
        cache.insert("w1".to_string(), vec!["en".to_string()]);
        cache.invalidate("w1");
        assert_eq!(cache.get("w1"), None);
    }

    #[test]
    fn noop_never_hits() {
        let cache = NoopLanguageCache;
        cache.insert("w1".to_string(), vec!["en".to_string()]);
        assert_eq!(cache.get("w1"), None);
    }
}
