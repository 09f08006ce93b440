//! OpenWeather 5 day / 3 hour forecast client.

use serde_json::Value;
use tracing::warn;

/// Default base URL for the forecast endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Forecast slots requested: today, every 3 hours.
const FORECAST_SLOTS: u8 = 8;

/// Message used when the provider does not give one.
pub const DEFAULT_ERROR_MESSAGE: &str = "failed to fetch weather information";

/// Errors from the weather provider.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl WeatherError {
    /// The message to show the user.
    pub fn user_message(&self) -> &str {
        match self {
            WeatherError::Http(_) => DEFAULT_ERROR_MESSAGE,
            WeatherError::Api { message, .. } => message,
        }
    }
}

/// Configuration for the weather client.
#[derive(Debug, Clone)]
pub struct WeatherClientConfig {
    /// OpenWeather API key
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WeatherClientConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

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

/// Client for the OpenWeather forecast API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a new weather client.
    pub fn new(config: WeatherClientConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch today's forecast for a city, in metric units with Japanese
    /// descriptions.
    pub async fn forecast(&self, city: &str) -> Result<Value, WeatherError> {
        let slots = FORECAST_SLOTS.to_string();
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "ja"),
                ("cnt", slots.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = provider_message(&body).unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.into());
            warn!(status = status.as_u16(), %message, "weather provider returned an error");
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

/// Extract the `message` field from an OpenWeather error body.
fn provider_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
