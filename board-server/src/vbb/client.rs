//! VBB transport REST HTTP client.
//!
//! Async client for `v6.vbb.transport.rest`. Limits concurrency with a
//! semaphore and retries server-side failures with exponential backoff.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::{debug, warn};

use super::error::VbbError;
use super::types::{DeparturesResponse, VbbDeparture, VbbStation};

/// Default base URL for the VBB REST API.
const DEFAULT_BASE_URL: &str = "https://v6.vbb.transport.rest";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Total attempts per request, including the first.
const RETRY_ATTEMPTS: u32 = 3;

/// Backoff before the first retry; doubles per attempt.
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Configuration for the VBB client.
#[derive(Debug, Clone)]
pub struct VbbConfig {
    /// Base URL for the API (defaults to the public instance)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl VbbConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 5,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for VbbConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// VBB REST API client.
#[derive(Debug, Clone)]
pub struct VbbClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl VbbClient {
    pub fn new(config: VbbConfig) -> Result<Self, VbbError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Stations near a coordinate, closest first as the API returns them.
    pub async fn nearby_stations(
        &self,
        latitude: f64,
        longitude: f64,
        results: u32,
    ) -> Result<Vec<VbbStation>, VbbError> {
        let url = format!("{}/locations/nearby", self.base_url);
        let body = self
            .get_with_retry(&url, &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("results", results.to_string()),
            ])
            .await?;

        let stations: Vec<VbbStation> =
            serde_json::from_str(&body).map_err(|e| VbbError::Json {
                message: e.to_string(),
                body: body.chars().take(500).collect(),
            })?;
        debug!(count = stations.len(), "fetched nearby stations");
        Ok(stations)
    }

    /// Departures from a stop within the next `duration_mins` minutes.
    pub async fn departures(
        &self,
        stop_id: &str,
        duration_mins: u32,
    ) -> Result<Vec<VbbDeparture>, VbbError> {
        let url = format!("{}/stops/{}/departures", self.base_url, stop_id);
        let body = self
            .get_with_retry(&url, &[
                ("duration", duration_mins.to_string()),
                ("linesOfStops", "false".to_string()),
                ("remarks", "false".to_string()),
                ("language", "en".to_string()),
            ])
            .await?;

        let response: DeparturesResponse =
            serde_json::from_str(&body).map_err(|e| VbbError::Json {
                message: e.to_string(),
                body: body.chars().take(500).collect(),
            })?;
        debug!(
            stop_id,
            count = response.departures.len(),
            "fetched departures"
        );
        Ok(response.departures)
    }

    /// GET with bounded concurrency, retrying transport errors and 5xx
    /// responses with exponential backoff.
    async fn get_with_retry(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, VbbError> {
        let _permit = self.semaphore.acquire().await.map_err(|_| VbbError::Api {
            status: 0,
            message: "Semaphore closed".to_string(),
        })?;

        let mut delay = Duration::from_millis(RETRY_BASE_DELAY_MS);
        let mut last_error = None;

        for attempt in 1..=RETRY_ATTEMPTS {
            if attempt > 1 {
                tokio::time::sleep(delay).await;
                delay *= 2;
            }

            let response = match self.http.get(url).query(query).send().await {
                Ok(response) => response,
                Err(error) => {
                    warn!(url, attempt, %error, "VBB request failed");
                    last_error = Some(VbbError::Http(error));
                    continue;
                }
            };

            let status = response.status();
            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!(url, attempt, status = status.as_u16(), "VBB server error");
                last_error = Some(VbbError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(VbbError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            return Ok(response.text().await?);
        }

        // Unreachable only if RETRY_ATTEMPTS were zero
        Err(last_error.unwrap_or(VbbError::Api {
            status: 0,
            message: "no attempts made".to_string(),
        }))
    }
}
