//! Service status page client.

use tracing::{debug, warn};

use crate::domain::ServiceStatus;
use crate::schedule::StatusSource;

use super::error::StatusError;
use super::parse::StatusParser;

/// Default status page: Yahoo! transit information for the Tozai line.
const DEFAULT_URL: &str = "https://transit.yahoo.co.jp/diainfo/135/0";

/// Element holding the line status on the default page.
const DEFAULT_CONTAINER_SELECTOR: &str = "div.elmServiceStatus";

/// Phrase shown when the line runs normally ("normal operation").
const DEFAULT_NORMAL_MARKER: &str = "平常運転";

/// Configuration for the status page client.
#[derive(Debug, Clone)]
pub struct StatusClientConfig {
    /// Status page URL
    pub url: String,
    /// CSS selector for the status container
    pub container_selector: String,
    /// Text inside the container that means normal operation
    pub normal_marker: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StatusClientConfig {
    /// Set a custom page URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StatusClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            normal_marker: DEFAULT_NORMAL_MARKER.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Scrapes the line status page.
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    url: String,
    parser: StatusParser,
}

impl StatusClient {
    /// Create a new status client.
    pub fn new(config: StatusClientConfig) -> Result<Self, StatusError> {
        let parser = StatusParser::new(&config.container_selector, config.normal_marker)?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
            parser,
        })
    }

    /// Fetch and classify the status page.
    ///
    /// Never fails: any fetch problem is reported as
    /// [`ServiceStatus::FetchFailed`].
    pub async fn current_status(&self) -> ServiceStatus {
        match self.fetch_page().await {
            Ok(html) => {
                let status = self.parser.classify(&html);
                debug!(?status, "classified service status page");
                status
            }
            Err(e) => {
                warn!(error = %e, url = %self.url, "failed to fetch service status page");
                ServiceStatus::FetchFailed
            }
        }
    }

    async fn fetch_page(&self) -> Result<String, reqwest::Error> {
        let response = self.http.get(&self.url).send().await?.error_for_status()?;
        response.text().await
    }
}

impl StatusSource for StatusClient {
    async fn fetch_status(&self) -> ServiceStatus {
        self.current_status().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StatusClientConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.container_selector, "div.elmServiceStatus");
        assert_eq!(config.normal_marker, "平常運転");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = StatusClientConfig::default()
            .with_url("http://localhost:9000/status")
            .with_timeout(2);
        assert_eq!(config.url, "http://localhost:9000/status");
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn client_creation() {
        assert!(StatusClient::new(StatusClientConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn unreachable_page_is_fetch_failed() {
        // Port 9 (discard) on loopback refuses connections.
        let config = StatusClientConfig::default()
            .with_url("http://127.0.0.1:9/diainfo")
            .with_timeout(2);
        let client = StatusClient::new(config).unwrap();

        assert_eq!(client.current_status().await, ServiceStatus::FetchFailed);
    }
}
