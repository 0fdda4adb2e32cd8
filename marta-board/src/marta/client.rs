//! MARTA rail API HTTP client.
//!
//! Provides async methods for fetching live arrival records and station
//! listings per line. The feed is unauthenticated and returns plain JSON
//! arrays.

use serde::de::DeserializeOwned;

use crate::domain::Line;

use super::error::MartaError;
use super::types::Arrival;

/// Default base URL for the MARTA rail feed.
const DEFAULT_BASE_URL: &str = "https://midsem-bootcamp-api.onrender.com";

/// Configuration for the MARTA client.
#[derive(Debug, Clone)]
pub struct MartaConfig {
    /// Base URL for the feed (defaults to the hosted API)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MartaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl MartaConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// MARTA rail feed client.
///
/// Provides methods for fetching the live arrivals board and the station
/// directory for each line.
#[derive(Debug, Clone)]
pub struct MartaClient {
    http: reqwest::Client,
    base_url: String,
}

impl MartaClient {
    /// Create a new MARTA client with the given configuration.
    pub fn new(config: MartaConfig) -> Result<Self, MartaError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Get the current arrival records for a line.
    ///
    /// Returns the feed's records untouched: duplicates, blanks, and
    /// off-line strays are all passed through for the board pipeline to
    /// reconcile.
    pub async fn arrivals(&self, line: Line) -> Result<Vec<Arrival>, MartaError> {
        let url = format!("{}/arrivals/{}", self.base_url, line.as_str());
        self.get_json(&url).await
    }

    /// Get the station names for a line, in track order.
    pub async fn stations(&self, line: Line) -> Result<Vec<String>, MartaError> {
        let url = format!("{}/stations/{}", self.base_url, line.as_str());
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, MartaError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MartaError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MartaError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
