//! Station code → display name lookup.

use std::collections::HashMap;
use std::path::Path;

/// Display name used when a station code is not in the directory.
pub const UNKNOWN_STATION: &str = "unknown station";

/// Errors loading a station directory from disk.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The file could not be read
    #[error("failed to read station directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON object of strings
    #[error("invalid station directory {path}: {message}")]
    Json { path: String, message: String },
}

/// Immutable mapping from provider station codes to display names.
///
/// Loaded once at startup and shared read-only between requests. Lookups
/// never fail: a missing code resolves to [`UNKNOWN_STATION`].
///
/// # Examples
///
/// ```
/// use schedule_server::domain::{StationDirectory, UNKNOWN_STATION};
///
/// let directory = StationDirectory::default();
/// assert_eq!(directory.name("odpt.Station:TokyoMetro.Tozai.Nakano"), "中野");
/// assert_eq!(directory.name("odpt.Station:Nowhere"), UNKNOWN_STATION);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDirectory {
    names: HashMap<String, String>,
}

impl StationDirectory {
    /// Create a directory from (code, name) pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    /// Load a directory from a JSON object file (`{"code": "name", ...}`).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let names: HashMap<String, String> =
            serde_json::from_str(&json).map_err(|e| DirectoryError::Json {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { names })
    }

    /// Look up a station's display name.
    pub fn name(&self, code: &str) -> &str {
        self.names
            .get(code)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_STATION)
    }

    /// Resolve the first code of a destination list.
    ///
    /// An empty list resolves to [`UNKNOWN_STATION`].
    pub fn first_name(&self, codes: &[String]) -> &str {
        codes
            .first()
            .map(|code| self.name(code))
            .unwrap_or(UNKNOWN_STATION)
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for StationDirectory {
    /// Terminals served by Tozai line trains departing Nishi-Funabashi.
    fn default() -> Self {
        Self::new([
            ("odpt.Station:TokyoMetro.Tozai.Nakano", "中野"),
            ("odpt.Station:ToyoRapid.ToyoRapid.ToyoKatsutadai", "東葉勝田台"),
            ("odpt.Station:JR-East.ChuoSobuLocal.Mitaka", "三鷹"),
            ("odpt.Station:TokyoMetro.Tozai.Toyocho", "東陽町"),
            ("odpt.Station:TokyoMetro.Tozai.NishiFunabashi", "西船橋"),
            ("odpt.Station:TokyoMetro.Tozai.Kudanshita", "九段下"),
        ])
    }
}
