//! Line service status scraped from the operator status page.

use std::fmt;

/// Current service state of the line.
///
/// Recomputed on every schedule request. The failure variants are ordinary
/// values: a status problem degrades the label, it never fails a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceStatus {
    /// The status page reports normal operation
    Normal,
    /// The status container is present but does not report normal operation
    PossibleDelay,
    /// The page was fetched but had no status container
    Unknown,
    /// The page could not be fetched
    FetchFailed,
}

impl ServiceStatus {
    /// Human-readable label attached to each departure.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Normal => "normal operation",
            ServiceStatus::PossibleDelay => "possible delay",
            ServiceStatus::Unknown => "status container not found",
            ServiceStatus::FetchFailed => "failed to fetch service status",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
