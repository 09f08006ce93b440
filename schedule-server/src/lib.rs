//! Departure board server.
//!
//! Answers "when are the next trains from Nishi-Funabashi, and when will I
//! reach Takadanobaba?" by joining the ODPT station timetable with the
//! line's scraped service status. Also proxies weather forecasts for the
//! same front end.

pub mod config;
pub mod domain;
pub mod logging;
pub mod odpt;
pub mod schedule;
pub mod status;
pub mod weather;
pub mod web;
