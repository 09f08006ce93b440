//! Web layer for the departure board.
//!
//! Serves the index page and the JSON endpoints it calls.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LiveScheduleAggregator};
pub use templates::*;
