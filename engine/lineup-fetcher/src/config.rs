use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the lineup fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Base URL of the lineup backend
    pub backend_url: String,

    /// League the dashboard is scoped to
    pub league_id: u64,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// Response cache settings
    pub cache: CacheSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    /// How long a cached response stays valid, in seconds
    pub ttl_secs: u64,

    /// Maximum number of cached `(endpoint, team)` responses
    pub max_entries: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            league_id: 47097656,
            timeout_secs: 30,
            cache: CacheSettings { ttl_secs: 300, max_entries: 256 },
        }
    }
}

impl FetcherConfig {
    /// Load configuration, overriding defaults with environment variables
    /// where present.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("BACKEND_URL") {
            config.backend_url = url;
        }
        if let Ok(league) = std::env::var("LEAGUE_ID") {
            if let Ok(league) = league.parse() {
                config.league_id = league;
            }
        }
        if let Ok(timeout) = std::env::var("FETCH_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                config.timeout_secs = timeout;
            }
        }
        if let Ok(ttl) = std::env::var("CACHE_TTL_SECS") {
            if let Ok(ttl) = ttl.parse() {
                config.cache.ttl_secs = ttl;
            }
        }

        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }
}
