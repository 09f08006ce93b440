//! OpenWeather forecast proxy.
//!
//! The front end asks for today's forecast for a city; the response is
//! passed through untouched. Only the error message is reshaped.

mod client;

pub use client::{DEFAULT_ERROR_MESSAGE, WeatherClient, WeatherClientConfig, WeatherError};
