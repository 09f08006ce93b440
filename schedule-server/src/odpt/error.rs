//! Timetable client error types.

/// Errors from fetching the station timetable.
///
/// Either variant fails the whole schedule request.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// The provider returned a non-success status or could not be reached
    #[error("timetable provider unavailable: {message}")]
    UpstreamUnavailable {
        /// HTTP status, when the provider answered at all
        status: Option<u16>,
        message: String,
    },

    /// The response body was not a station timetable document
    #[error("malformed timetable payload: {message}{}", body_suffix(.body))]
    UpstreamMalformed {
        message: String,
        body: Option<String>,
    },
}

/// Body snippet for the log line, when one was captured.
fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

impl From<reqwest::Error> for TimetableError {
    fn from(err: reqwest::Error) -> Self {
        TimetableError::UpstreamUnavailable {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
