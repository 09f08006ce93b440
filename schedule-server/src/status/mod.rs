//! Line service status, scraped from a public status page.

mod client;
mod error;
mod parse;

pub use client::{StatusClient, StatusClientConfig};
pub use error::StatusError;
pub use parse::StatusParser;
