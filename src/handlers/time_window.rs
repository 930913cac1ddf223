// src/handlers/time_window.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    models::time_window::{TimeWindow, UpdateTimeWindowRequest},
    state::AppState,
    utils::{
        extract::AppJson,
        jwt::Caller,
        time_gate::{GateContext, evaluate},
    },
};

/// Returns the current window and whether it is open for this caller.
pub async fn get_time_window(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let window = state.time_windows.get().await?;
    let now = state.clock.now();

    let decision = evaluate(&GateContext {
        now,
        window,
        is_privileged: caller.is_privileged(),
        development_mode: state.config.development_mode,
    });

    Ok(Json(json!({
        "success": true,
        "timeWindow": window.view(),
        "isOpen": decision.is_open(),
        "serverTime": now.format("%H:%M").to_string(),
    })))
}

/// Replaces the daily window.
/// Admin only.
pub async fn update_time_window(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateTimeWindowRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let current = state.time_windows.get().await?;
    let window = TimeWindow::from_hhmm(
        &payload.start,
        &payload.end,
        payload.admin_bypass.unwrap_or(current.admin_bypass),
    )
    .map_err(AppError::BadRequest)?;

    let saved = state.time_windows.set(window).await?;
    tracing::info!(
        start = saved.start_minutes,
        end = saved.end_minutes,
        admin_bypass = saved.admin_bypass,
        "Time window updated"
    );

    Ok(Json(json!({
        "success": true,
        "timeWindow": saved.view(),
    })))
}
