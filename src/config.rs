// src/config.rs

use std::env;
use dotenvy::dotenv;

use crate::models::time_window::TimeWindow;

/// Number of problems in a daily set.
pub const PROBLEM_SET_SIZE: usize = 10;

/// Attempts allowed per required problem before a type is reported short.
pub const RETRY_MULTIPLIER: usize = 20;

/// Where persistent state lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub rust_log: String,
    /// Opens the gate for everyone (APP_ENV=development).
    pub development_mode: bool,
    /// Window used until an admin stores one.
    pub default_time_window: TimeWindow,
    pub port: u16,
    pub storage: StorageBackend,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let storage = match env::var("STORAGE").as_deref() {
            Ok("memory") => StorageBackend::Memory,
            _ => StorageBackend::Postgres,
        };

        let database_url = match storage {
            StorageBackend::Postgres => Some(
                env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            ),
            StorageBackend::Memory => env::var("DATABASE_URL").ok(),
        };

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let development_mode = env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("development"))
            .unwrap_or(false);

        let start = env::var("TIME_WINDOW_START").unwrap_or_else(|_| "06:30".to_string());
        let end = env::var("TIME_WINDOW_END").unwrap_or_else(|_| "08:00".to_string());
        let default_time_window = TimeWindow::from_hhmm(&start, &end, true)
            .unwrap_or_else(|e| panic!("Invalid TIME_WINDOW_START/TIME_WINDOW_END: {}", e));

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            jwt_secret,
            rust_log,
            development_mode,
            default_time_window,
            port,
            storage,
        }
    }
}
