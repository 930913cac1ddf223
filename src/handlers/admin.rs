// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    generator::generate_for_date,
    handlers::problems::parse_difficulty,
    models::problem_set::{DailyProblemSet, EditProblemSetRequest},
    state::AppState,
    utils::extract::AppJson,
};

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}

/// Shows the full problem set (with answers) for a day.
/// Admin only. Generates it when no edited set is stored.
pub async fn get_problem_set(
    State(state): State<AppState>,
    Path((date, difficulty)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&date)?;
    let difficulty = parse_difficulty(Some(difficulty.as_str()))?;

    if let Some(stored) = state.problem_sets.find(date, difficulty).await? {
        return Ok(Json(json!({
            "success": true,
            "date": stored.date,
            "difficulty": stored.difficulty,
            "problems": stored.problems,
            "isEdited": stored.is_edited,
            "updatedAt": stored.updated_at,
            "shortfalls": [],
        })));
    }

    let generated = generate_for_date(difficulty, date);
    Ok(Json(json!({
        "success": true,
        "date": date,
        "difficulty": difficulty,
        "problems": generated.problems,
        "isEdited": false,
        "updatedAt": null,
        "shortfalls": generated.shortfalls,
    })))
}

/// Overwrites a day's problem set and marks it edited.
/// Admin only. Concurrent edits: last write wins.
pub async fn update_problem_set(
    State(state): State<AppState>,
    Path((date, difficulty)): Path<(String, String)>,
    AppJson(payload): AppJson<EditProblemSetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&date)?;
    let difficulty = parse_difficulty(Some(difficulty.as_str()))?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let saved = state
        .problem_sets
        .upsert(DailyProblemSet {
            date,
            difficulty,
            problems: payload.into_problems(),
            is_edited: true,
            updated_at: None,
        })
        .await?;

    tracing::info!(%date, %difficulty, count = saved.problems.len(), "Problem set edited");

    Ok(Json(json!({
        "success": true,
        "date": saved.date,
        "difficulty": saved.difficulty,
        "problems": saved.problems,
        "isEdited": saved.is_edited,
        "updatedAt": saved.updated_at,
    })))
}

/// Drops an edited set so the generated one is served again.
/// Admin only.
pub async fn delete_problem_set(
    State(state): State<AppState>,
    Path((date, difficulty)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&date)?;
    let difficulty = parse_difficulty(Some(difficulty.as_str()))?;

    if !state.problem_sets.delete(date, difficulty).await? {
        return Err(AppError::NotFound("Problem set not found".to_string()));
    }

    tracing::info!(%date, %difficulty, "Edited problem set removed");
    Ok(StatusCode::NO_CONTENT)
}
