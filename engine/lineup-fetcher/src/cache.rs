//! In-memory response cache
//!
//! Caches lineup responses keyed by `(endpoint, team)`. Entries expire after
//! a TTL and the map is capped at a fixed number of entries, so a
//! long-running dashboard process cannot grow without bound. Writes are
//! idempotent (same key fetches the same backend value), so concurrent
//! requests racing to populate a key is harmless.

use crate::config::CacheSettings;
use crate::fetcher::LineupEndpoint;
use lineup_core::types::RawLineupRecord;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub endpoint: LineupEndpoint,
    pub team_id: u32,
}

struct CacheEntry {
    record: RawLineupRecord,
    inserted_at: Instant,
}

/// TTL + size-bounded cache for backend lineup responses.
pub struct ResponseCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self { entries: RwLock::new(HashMap::new()), ttl, max_entries }
    }

    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::new(Duration::from_secs(settings.ttl_secs), settings.max_entries)
    }

    /// Get a cached record, if present and not expired.
    pub fn get(&self, key: &CacheKey) -> Option<RawLineupRecord> {
        let entries = self.entries.read();
        match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                debug!(?key, "lineup cache hit");
                Some(entry.record.clone())
            }
            Some(_) => {
                debug!(?key, "lineup cache entry expired");
                None
            }
            None => {
                debug!(?key, "lineup cache miss");
                None
            }
        }
    }

    /// Insert a record, purging expired entries and evicting the oldest
    /// entry when the cache is full.
    pub fn insert(&self, key: CacheKey, record: RawLineupRecord) {
        let mut entries = self.entries.write();
        entries.retain(|_, entry| entry.inserted_at.elapsed() < self.ttl);

        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            if let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(&k, _)| k)
            {
                entries.remove(&oldest);
            }
        }

        entries.insert(key, CacheEntry { record, inserted_at: Instant::now() });
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
