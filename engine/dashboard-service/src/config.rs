use lineup_fetcher::FetcherConfig;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Configuration for the dashboard service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address to bind
    pub host: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Fetcher configuration (backend URL, league, cache)
    pub fetcher: FetcherConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8050,
            fetcher: FetcherConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration, overriding defaults with environment variables
    /// where present.
    pub fn from_env() -> Self {
        let mut config = Self { fetcher: FetcherConfig::from_env(), ..Self::default() };

        if let Ok(host) = std::env::var("DASHBOARD_HOST") {
            if let Ok(host) = host.parse() {
                config.host = host;
            }
        }
        if let Ok(port) = std::env::var("DASHBOARD_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            }
        }

        config
    }
}
