//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tracing::{error, warn};

use crate::odpt::TimetableError;
use crate::weather::WeatherError;

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Message returned when the timetable cannot be fetched. The cause is
/// logged, not shown.
const SCHEDULE_ERROR_MESSAGE: &str = "Failed to retrieve data.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/schedule", get(schedule))
        .route("/api/weather", post(weather))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        travel_minutes: state.schedule.route().travel_minutes,
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html))
}

/// Next departures with arrival times and line status.
async fn schedule(State(state): State<AppState>) -> Result<Json<Vec<DepartureResult>>, AppError> {
    let response = state.schedule.compute_schedule().await?;

    let results = response
        .departures
        .iter()
        .map(DepartureResult::from_scheduled)
        .collect();

    Ok(Json(results))
}

/// Today's forecast for a city, passed through from the provider.
async fn weather(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, AppError> {
    // Parse JSON manually so a bad body gets our error shape
    let req: WeatherRequest = serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
        message: format!("Invalid JSON: {e}"),
    })?;

    let city = req
        .city
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "please enter a city name".to_string(),
        })?;

    let forecast = state.weather.forecast(&city).await?;
    Ok(Json(forecast))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<TimetableError> for AppError {
    fn from(e: TimetableError) -> Self {
        error!(error = %e, "failed to compute schedule");
        AppError::Internal {
            message: SCHEDULE_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        AppError::BadRequest {
            message: format!("error: {}", e.user_message()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
