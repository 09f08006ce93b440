//! ODPT station timetable HTTP client.
//!
//! One request per call. The consumer key travels as the `acl:consumerKey`
//! query parameter rather than a header.

use tracing::debug;

use crate::domain::RawTimetableEntry;
use crate::schedule::TimetableSource;

use super::convert::flatten_station_timetables;
use super::error::TimetableError;
use super::types::StationTimetable;

/// Default endpoint for station timetables.
const DEFAULT_BASE_URL: &str = "https://api.odpt.org/api/v4/odpt:StationTimetable";

/// Default request timeout. The full timetable document is large and the
/// provider is slow to produce it.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the timetable client.
#[derive(Debug, Clone)]
pub struct TimetableClientConfig {
    /// ODPT consumer key
    pub consumer_key: String,
    /// Endpoint URL (defaults to the production ODPT API)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TimetableClientConfig {
    /// Create a new config with the given consumer key.
    pub fn new(consumer_key: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom endpoint URL (for testing).
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

/// Client for the ODPT station timetable endpoint.
#[derive(Debug, Clone)]
pub struct TimetableClient {
    http: reqwest::Client,
    base_url: String,
    consumer_key: String,
}

impl TimetableClient {
    /// Create a new timetable client.
    pub fn new(config: TimetableClientConfig) -> Result<Self, TimetableError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            consumer_key: config.consumer_key,
        })
    }

    /// Fetch every station timetable and flatten it into entries.
    ///
    /// No retry: one failed request is one failed schedule.
    pub async fn fetch_all(&self) -> Result<Vec<RawTimetableEntry>, TimetableError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("acl:consumerKey", self.consumer_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TimetableError::UpstreamUnavailable {
                status: Some(status.as_u16()),
                message: format!("API error {}: {}", status.as_u16(), body),
            });
        }

        let body = response.text().await?;

        let timetables: Vec<StationTimetable> =
            serde_json::from_str(&body).map_err(|e| TimetableError::UpstreamMalformed {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let entries = flatten_station_timetables(&timetables).map_err(|e| {
            TimetableError::UpstreamMalformed {
                message: e.to_string(),
                body: None,
            }
        })?;

        debug!(
            timetables = timetables.len(),
            entries = entries.len(),
            "fetched station timetables"
        );

        Ok(entries)
    }
}

impl TimetableSource for TimetableClient {
    async fn fetch_timetable(&self) -> Result<Vec<RawTimetableEntry>, TimetableError> {
        self.fetch_all().await
    }
}
