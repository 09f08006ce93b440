//! Status client error types.
//!
//! These only arise while building the client. Fetch failures are not
//! errors; they become [`ServiceStatus::FetchFailed`](crate::domain::ServiceStatus).

/// Errors constructing the status page client.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The container selector is not valid CSS
    #[error("invalid status selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
}
