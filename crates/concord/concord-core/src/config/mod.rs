pub mod cache_config;
pub mod consensus_config;
pub mod defaults;
pub mod discovery_config;
pub mod insights_config;
pub mod keyword_config;
pub mod observability_config;

pub use cache_config::CacheConfig;
pub use consensus_config::ConsensusConfig;
pub use discovery_config::DiscoveryConfig;
pub use insights_config::InsightsConfig;
pub use keyword_config::KeywordConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConcordError, ConcordResult};

/// Top-level engine configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcordConfig {
    pub discovery: DiscoveryConfig,
    pub keywords: KeywordConfig,
    pub consensus: ConsensusConfig,
    pub insights: InsightsConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl ConcordConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    /// The initial thresholds are validated like any runtime update.
    pub fn from_toml(input: &str) -> ConcordResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConcordError::Config {
            reason: e.to_string(),
        })?;
        config.consensus.thresholds().validate()?;
        Ok(config)
    }
}
