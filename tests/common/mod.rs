// tests/common/mod.rs

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use morning_math::{
    config::{Config, StorageBackend},
    models::time_window::TimeWindow,
    routes,
    state::AppState,
    utils::{clock::FixedClock, jwt::sign_jwt},
};

pub const JWT_SECRET: &str = "test_secret_for_integration_tests";

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    test_date().and_hms_opt(hour, minute, 0).unwrap()
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        jwt_secret: JWT_SECRET.to_string(),
        rust_log: "error".to_string(),
        development_mode: false,
        default_time_window: TimeWindow::from_hhmm("06:30", "08:00", true).unwrap(),
        port: 0,
        storage: StorageBackend::Memory,
    }
}

pub fn admin_token() -> String {
    sign_jwt("1", "admin", JWT_SECRET, 600).unwrap()
}

pub fn user_token() -> String {
    sign_jwt("2", "user", JWT_SECRET, 600).unwrap()
}

/// Spawns the app on a random port with in-memory stores and a clock frozen at `now`.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app_with(config: Config, now: NaiveDateTime) -> String {
    spawn_state(AppState::in_memory(config).with_clock(FixedClock(now))).await
}

/// Spawns the app around a hand-built state, e.g. with a failing store swapped in.
pub async fn spawn_state(state: AppState) -> String {
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

pub async fn spawn_app(now: NaiveDateTime) -> String {
    spawn_app_with(test_config(), now).await
}
