use serde::{Deserialize, Serialize};

use super::defaults;

/// Read cache over "available target languages for word X".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Disable to always re-derive from the index.
    pub enabled: bool,
    pub ttl_secs: u64,
    pub capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CACHE_ENABLED,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}
