// src/store/postgres.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, types::Json};

use crate::{
    error::AppError,
    models::{
        problem::{Difficulty, ProblemSpec},
        problem_set::DailyProblemSet,
        time_window::TimeWindow,
    },
    store::{ProblemSetStore, TimeWindowStore},
};

/// Window store backed by the single-row `time_window_settings` table.
#[derive(Clone)]
pub struct PgTimeWindowStore {
    pool: PgPool,
    default_window: TimeWindow,
}

impl PgTimeWindowStore {
    pub fn new(pool: PgPool, default_window: TimeWindow) -> Self {
        Self {
            pool,
            default_window,
        }
    }
}

#[async_trait]
impl TimeWindowStore for PgTimeWindowStore {
    async fn get(&self) -> Result<TimeWindow, AppError> {
        let stored = sqlx::query_as::<_, TimeWindow>(
            r#"
            SELECT start_minutes, end_minutes, admin_bypass
            FROM time_window_settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load time window: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(stored.unwrap_or(self.default_window))
    }

    async fn set(&self, window: TimeWindow) -> Result<TimeWindow, AppError> {
        let saved = sqlx::query_as::<_, TimeWindow>(
            r#"
            INSERT INTO time_window_settings (id, start_minutes, end_minutes, admin_bypass)
            VALUES (1, $1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                start_minutes = EXCLUDED.start_minutes,
                end_minutes = EXCLUDED.end_minutes,
                admin_bypass = EXCLUDED.admin_bypass,
                updated_at = CURRENT_TIMESTAMP
            RETURNING start_minutes, end_minutes, admin_bypass
            "#,
        )
        .bind(window.start_minutes)
        .bind(window.end_minutes)
        .bind(window.admin_bypass)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save time window: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(saved)
    }
}

/// Row shape of `daily_problem_sets`.
#[derive(FromRow)]
struct ProblemSetRow {
    date: NaiveDate,
    difficulty: String,
    problems: Json<Vec<ProblemSpec>>,
    is_edited: bool,
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TryFrom<ProblemSetRow> for DailyProblemSet {
    type Error = AppError;

    fn try_from(row: ProblemSetRow) -> Result<Self, Self::Error> {
        let difficulty = row.difficulty.parse::<Difficulty>().map_err(|bad| {
            AppError::InternalServerError(format!("Stored set has unknown difficulty '{}'", bad))
        })?;

        Ok(DailyProblemSet {
            date: row.date,
            difficulty,
            problems: row.problems.0,
            is_edited: row.is_edited,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Clone)]
pub struct PgProblemSetStore {
    pool: PgPool,
}

impl PgProblemSetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProblemSetStore for PgProblemSetStore {
    async fn find(
        &self,
        date: NaiveDate,
        difficulty: Difficulty,
    ) -> Result<Option<DailyProblemSet>, AppError> {
        let row = sqlx::query_as::<_, ProblemSetRow>(
            r#"
            SELECT date, difficulty, problems, is_edited, updated_at
            FROM daily_problem_sets
            WHERE date = $1 AND difficulty = $2
            "#,
        )
        .bind(date)
        .bind(difficulty.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch problem set: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        row.map(DailyProblemSet::try_from).transpose()
    }

    async fn upsert(&self, set: DailyProblemSet) -> Result<DailyProblemSet, AppError> {
        let row = sqlx::query_as::<_, ProblemSetRow>(
            r#"
            INSERT INTO daily_problem_sets (date, difficulty, problems, is_edited)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (date, difficulty) DO UPDATE SET
                problems = EXCLUDED.problems,
                is_edited = EXCLUDED.is_edited,
                updated_at = CURRENT_TIMESTAMP
            RETURNING date, difficulty, problems, is_edited, updated_at
            "#,
        )
        .bind(set.date)
        .bind(set.difficulty.as_str())
        .bind(Json(&set.problems))
        .bind(set.is_edited)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert problem set: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        DailyProblemSet::try_from(row)
    }

    async fn delete(&self, date: NaiveDate, difficulty: Difficulty) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM daily_problem_sets WHERE date = $1 AND difficulty = $2")
            .bind(date)
            .bind(difficulty.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete problem set: {:?}", e);
                AppError::InternalServerError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
