//! Process configuration, read once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono_tz::Tz;
use tracing::warn;

use crate::domain::{DirectoryError, StationDirectory};
use crate::schedule::RouteConfig;

/// Listen address when `BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Timezone of the timetable when `SCHEDULE_TIMEZONE` is not set.
const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Tokyo;

/// Errors in the process configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },

    #[error("invalid SCHEDULE_TIMEZONE {value:?}: {message}")]
    InvalidTimezone { value: String, message: String },

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// ODPT consumer key (`TRANSPORT_API_KEY`)
    pub transport_api_key: String,

    /// OpenWeather API key (`OPENWEATHER_API_KEY`)
    pub openweather_api_key: String,

    /// Timezone the timetable's times are expressed in
    pub timezone: Tz,

    /// Optional JSON file replacing the built-in station names
    pub station_directory_path: Option<PathBuf>,

    /// The served route
    pub route: RouteConfig,
}

impl AppConfig {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through a variable lookup function.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let transport_api_key = get("TRANSPORT_API_KEY").unwrap_or_else(|| {
            warn!("TRANSPORT_API_KEY not set; timetable requests will fail");
            String::new()
        });
        let openweather_api_key = get("OPENWEATHER_API_KEY").unwrap_or_else(|| {
            warn!("OPENWEATHER_API_KEY not set; weather requests will fail");
            String::new()
        });

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidBindAddr {
                value: bind.clone(),
                message: e.to_string(),
            }
        })?;

        let timezone = match get("SCHEDULE_TIMEZONE") {
            None => DEFAULT_TIMEZONE,
            Some(value) => value
                .parse::<Tz>()
                .map_err(|e| ConfigError::InvalidTimezone {
                    value: value.clone(),
                    message: e.to_string(),
                })?,
        };

        Ok(Self {
            bind_addr,
            transport_api_key,
            openweather_api_key,
            timezone,
            station_directory_path: get("STATION_DIRECTORY_PATH").map(PathBuf::from),
            route: RouteConfig::default(),
        })
    }

    /// Load the station directory: the configured file, or the built-in table.
    pub fn station_directory(&self) -> Result<StationDirectory, ConfigError> {
        match &self.station_directory_path {
            Some(path) => Ok(StationDirectory::from_json_file(path)?),
            None => Ok(StationDirectory::default()),
        }
    }
}
