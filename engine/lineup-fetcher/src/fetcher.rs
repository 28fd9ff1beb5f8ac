//! HTTP client for the lineup backend
//!
//! One GET per `(endpoint, team)` pair against the backend's lineup routes,
//! cached through `ResponseCache`. Fetch failures degrade to an empty record
//! via `fetch_or_empty`: the pipeline renders a data-unavailable state from
//! zero weeks rather than failing the whole page.

use crate::cache::{CacheKey, ResponseCache};
use crate::config::FetcherConfig;
use crate::error::FetchError;
use anyhow::{Context, Result};
use lineup_core::types::{RawLineupRecord, ScenarioSeries};
use lineup_core::DataError;
use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info};

/// The three lineup scenarios the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineupEndpoint {
    /// Best possible lineup from the drafted roster.
    BestDrafted,
    /// Best possible lineup from the post-transaction roster.
    BestActual,
    /// Lineup the user actually started.
    Actual,
}

impl LineupEndpoint {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::BestDrafted => "best-drafted",
            Self::BestActual => "best-actual",
            Self::Actual => "actual",
        }
    }
}

/// The three raw scenario records for one team, ready for extraction.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRecords {
    pub draft: RawLineupRecord,
    pub actual_best: RawLineupRecord,
    pub actual_lineup: RawLineupRecord,
}

impl ScenarioRecords {
    pub fn is_empty(&self) -> bool {
        self.draft.is_empty() && self.actual_best.is_empty() && self.actual_lineup.is_empty()
    }

    /// Run the three records through the extractor.
    pub fn extract(&self) -> Result<ScenarioSeries, DataError> {
        Ok(ScenarioSeries {
            draft: lineup_core::extract(&self.draft)?,
            actual_best: lineup_core::extract(&self.actual_best)?,
            actual_lineup: lineup_core::extract(&self.actual_lineup)?,
        })
    }
}

/// Lineup backend client with a shared response cache.
pub struct LineupFetcher {
    client: Client,
    config: FetcherConfig,
    cache: Arc<ResponseCache>,
}

impl LineupFetcher {
    /// Create a fetcher owning its own cache.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let cache = Arc::new(ResponseCache::from_settings(&config.cache));
        Self::with_cache(config, cache)
    }

    /// Create a fetcher around an externally owned cache.
    pub fn with_cache(config: FetcherConfig, cache: Arc<ResponseCache>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, config, cache })
    }

    fn endpoint_url(&self, endpoint: LineupEndpoint, team_id: u32) -> String {
        format!(
            "{}/leagues/{}/teams/lineups/{}?teamId={}",
            self.config.backend_url,
            self.config.league_id,
            endpoint.path_segment(),
            team_id,
        )
    }

    /// Fetch one scenario record, consulting the cache first.
    pub async fn fetch(
        &self,
        endpoint: LineupEndpoint,
        team_id: u32,
    ) -> Result<RawLineupRecord, FetchError> {
        let key = CacheKey { endpoint, team_id };
        if let Some(record) = self.cache.get(&key) {
            return Ok(record);
        }

        let url = self.endpoint_url(endpoint, team_id);
        info!(%url, "fetching lineup data");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status { status: response.status().as_u16(), url });
        }

        let record: RawLineupRecord = response.json().await?;
        self.cache.insert(key, record.clone());
        Ok(record)
    }

    /// Fetch one scenario record, degrading to an empty record on failure.
    pub async fn fetch_or_empty(&self, endpoint: LineupEndpoint, team_id: u32) -> RawLineupRecord {
        match self.fetch(endpoint, team_id).await {
            Ok(record) => record,
            Err(e) => {
                error!(?endpoint, team_id, "lineup fetch failed: {e}");
                RawLineupRecord::new()
            }
        }
    }

    /// Fetch all three scenarios for one team.
    pub async fn fetch_scenarios(&self, team_id: u32) -> ScenarioRecords {
        ScenarioRecords {
            draft: self.fetch_or_empty(LineupEndpoint::BestDrafted, team_id).await,
            actual_best: self.fetch_or_empty(LineupEndpoint::BestActual, team_id).await,
            actual_lineup: self.fetch_or_empty(LineupEndpoint::Actual, team_id).await,
        }
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }
}
