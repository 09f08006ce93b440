use std::sync::Arc;

use schedule_server::config::AppConfig;
use schedule_server::logging::init_logger;
use schedule_server::odpt::{TimetableClient, TimetableClientConfig};
use schedule_server::schedule::{ScheduleAggregator, SystemClock};
use schedule_server::status::{StatusClient, StatusClientConfig};
use schedule_server::weather::{WeatherClient, WeatherClientConfig};
use schedule_server::web::{AppState, create_router};
use tracing::info;

#[tokio::main]
async fn main() {
    init_logger();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let directory = config
        .station_directory()
        .expect("Failed to load station directory");
    info!(stations = directory.len(), "loaded station directory");

    let timetable = TimetableClient::new(TimetableClientConfig::new(&config.transport_api_key))
        .expect("Failed to create timetable client");
    let status =
        StatusClient::new(StatusClientConfig::default()).expect("Failed to create status client");
    let weather = WeatherClient::new(WeatherClientConfig::new(&config.openweather_api_key))
        .expect("Failed to create weather client");

    let schedule = ScheduleAggregator::new(
        timetable,
        status,
        SystemClock::new(config.timezone),
        Arc::new(directory),
        config.route.clone(),
    );

    let app = create_router(AppState::new(schedule, weather));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");
    info!(addr = %config.bind_addr, timezone = %config.timezone, "departure board listening");
    info!("  GET  /              - Departure board page");
    info!("  GET  /api/schedule  - Next departures");
    info!("  POST /api/weather   - Weather forecast");

    axum::serve(listener, app).await.expect("Server error");
}
