//! Lineup Fetcher
//!
//! Retrieves per-week lineup records from the dashboard backend, one request
//! per `(endpoint, team)` pair, with an in-memory TTL cache in front so the
//! chart pipeline can be re-run on every UI interaction without hammering
//! the backend.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;

pub use cache::{CacheKey, ResponseCache};
pub use config::{CacheSettings, FetcherConfig};
pub use error::FetchError;
pub use fetcher::{LineupEndpoint, LineupFetcher, ScenarioRecords};
