//! Caching layer for MARTA feed responses.
//!
//! The feed recomputes its arrival predictions every few seconds, so
//! entries are held only briefly: long enough to absorb a burst of page
//! loads and filter changes, short enough that the board stays live.
//!
//! The cache key is the line a fetch was issued for, so a response can
//! only ever serve requests for that same line; a slow fetch for one line
//! can never show up on another line's board.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Line;
use crate::marta::{Arrival, MartaClient, MartaError};

/// Cached arrivals snapshot for one line.
type ArrivalsEntry = Arc<Vec<Arrival>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(15),
            max_capacity: 16,
        }
    }
}

/// Cache for arrivals responses, keyed by line.
pub struct ArrivalsCache {
    arrivals: MokaCache<Line, ArrivalsEntry>,
}

impl ArrivalsCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let arrivals = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { arrivals }
    }

    /// Get the cached snapshot for a line.
    pub async fn get(&self, line: Line) -> Option<ArrivalsEntry> {
        self.arrivals.get(&line).await
    }

    /// Insert a snapshot for a line.
    pub async fn insert(&self, line: Line, entry: ArrivalsEntry) {
        self.arrivals.insert(line, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.arrivals.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.arrivals.invalidate_all();
    }
}

/// MARTA client with caching.
///
/// Wraps a `MartaClient` and caches arrivals responses per line. Station
/// listings are not cached here; they change on the order of years and are
/// handled by the station directory instead.
pub struct CachedMartaClient {
    client: MartaClient,
    cache: ArrivalsCache,
}

impl CachedMartaClient {
    /// Create a new cached client.
    pub fn new(client: MartaClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: ArrivalsCache::new(cache_config),
        }
    }

    /// Get the arrivals snapshot for a line, using cache if available.
    pub async fn arrivals(&self, line: Line) -> Result<ArrivalsEntry, MartaError> {
        if let Some(cached) = self.cache.get(line).await {
            return Ok(cached);
        }

        let records = self.client.arrivals(line).await?;

        let entry = Arc::new(records);
        self.cache.insert(line, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &MartaClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
