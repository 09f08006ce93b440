//! Askama templates for the web frontend.

use askama::Template;

/// Home page: departure board and weather lookup.
///
/// The page itself is static; it calls `/api/schedule` and `/api/weather`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Ride length shown under the board
    pub travel_minutes: u32,
}
