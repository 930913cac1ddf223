// src/models/time_window.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// The daily clock interval during which problems can be fetched and submitted.
/// Stored as minutes since midnight (server-local time); both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_minutes: i32,
    pub end_minutes: i32,
    /// Whether privileged callers may bypass the window.
    pub admin_bypass: bool,
}

impl TimeWindow {
    /// Builds a window, enforcing `0 <= start < end <= 1439`.
    pub fn new(start_minutes: i32, end_minutes: i32, admin_bypass: bool) -> Result<Self, String> {
        for bound in [start_minutes, end_minutes] {
            if !(0..MINUTES_PER_DAY).contains(&bound) {
                return Err(format!("Minute value {} is outside 0..=1439", bound));
            }
        }
        if start_minutes >= end_minutes {
            return Err("Window start must be before window end".to_string());
        }
        Ok(Self {
            start_minutes,
            end_minutes,
            admin_bypass,
        })
    }

    /// Builds a window from two "HH:MM" strings.
    pub fn from_hhmm(start: &str, end: &str, admin_bypass: bool) -> Result<Self, String> {
        Self::new(parse_hhmm(start)?, parse_hhmm(end)?, admin_bypass)
    }

    pub fn contains(&self, minutes: i32) -> bool {
        self.start_minutes <= minutes && minutes <= self.end_minutes
    }

    pub fn view(&self) -> TimeWindowView {
        TimeWindowView {
            start: format_hhmm(self.start_minutes),
            end: format_hhmm(self.end_minutes),
            start_minutes: self.start_minutes,
            end_minutes: self.end_minutes,
            admin_bypass: self.admin_bypass,
        }
    }
}

/// Client-facing rendering of a window, with "HH:MM" strings alongside the raw minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindowView {
    pub start: String,
    pub end: String,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub admin_bypass: bool,
}

/// Parses "HH:MM" (24h clock) into minutes since midnight.
pub fn parse_hhmm(value: &str) -> Result<i32, String> {
    let invalid = || format!("Invalid time '{}', expected HH:MM", value);

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    if !hours.chars().chain(minutes.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;

    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

pub fn format_hhmm(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// DTO for an admin updating the window.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeWindowRequest {
    #[validate(custom(function = validate_hhmm))]
    pub start: String,
    #[validate(custom(function = validate_hhmm))]
    pub end: String,
    pub admin_bypass: Option<bool>,
}

fn validate_hhmm(value: &str) -> Result<(), validator::ValidationError> {
    parse_hhmm(value)
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("time_must_be_hh_mm"))
}
