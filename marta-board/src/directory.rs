//! Station directory.
//!
//! Holds the per-line station listings behind the station picker. Listings
//! change on the order of years, so they are fetched once at startup and
//! refreshed periodically in the background.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::Line;
use crate::marta::MartaClient;

/// Thread-safe per-line station listings.
///
/// Lookups never fail: a line without a fetched listing yields an empty
/// list, which the picker renders as having no stations rather than as an
/// error. The arrivals board works without a picker, so directory fetch
/// failures are logged and tolerated.
#[derive(Clone)]
pub struct StationDirectory {
    inner: Arc<RwLock<HashMap<Line, Arc<Vec<String>>>>>,
    client: MartaClient,
}

impl StationDirectory {
    /// Create a directory by fetching every line's station listing.
    ///
    /// Lines whose fetch fails are logged and left out until the next
    /// refresh; the call itself always succeeds.
    pub async fn fetch(client: MartaClient) -> Self {
        let directory = Self::empty(client);
        directory.refresh().await;
        directory
    }

    /// Create an empty directory (for tests).
    pub fn empty(client: MartaClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            client,
        }
    }

    /// The station listing for a line, in track order.
    pub async fn get(&self, line: Line) -> Arc<Vec<String>> {
        let guard = self.inner.read().await;
        guard.get(&line).cloned().unwrap_or_default()
    }

    /// Number of lines with a fetched listing.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if no line has a listing yet.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Re-fetch every line's station listing.
    ///
    /// Lines are fetched concurrently. A line that fails keeps whatever
    /// listing it had before. Returns the number of lines refreshed.
    pub async fn refresh(&self) -> usize {
        let fetches = Line::ALL.map(|line| {
            let client = self.client.clone();
            async move { (line, client.stations(line).await) }
        });
        let results = futures::future::join_all(fetches).await;

        let mut refreshed = 0;
        let mut guard = self.inner.write().await;
        for (line, result) in results {
            match result {
                Ok(stations) => {
                    guard.insert(line, Arc::new(stations));
                    refreshed += 1;
                }
                Err(e) => {
                    warn!(line = %line, error = %e, "station listing fetch failed, keeping previous");
                }
            }
        }

        refreshed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marta::MartaConfig;

    fn client() -> MartaClient {
        MartaClient::new(MartaConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn empty_directory_has_no_listings() {
        let directory = StationDirectory::empty(client());

        assert!(directory.is_empty().await);
        assert_eq!(directory.len().await, 0);
    }

    #[tokio::test]
    async fn missing_line_yields_empty_listing() {
        let directory = StationDirectory::empty(client());

        let stations = directory.get(Line::Green).await;

        assert!(stations.is_empty());
    }
}
