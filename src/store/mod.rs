// src/store/mod.rs

//! Persistence seams. Handlers only see these traits; `main` picks the backend.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    error::AppError,
    models::{problem::Difficulty, problem_set::DailyProblemSet, time_window::TimeWindow},
};

pub use memory::{MemoryProblemSetStore, MemoryTimeWindowStore};
pub use postgres::{PgProblemSetStore, PgTimeWindowStore};

/// Holds the admin-configurable daily window.
#[async_trait]
pub trait TimeWindowStore: Send + Sync {
    /// The stored window, or the configured default when none was stored.
    async fn get(&self) -> Result<TimeWindow, AppError>;

    /// Replaces the stored window.
    async fn set(&self, window: TimeWindow) -> Result<TimeWindow, AppError>;
}

/// Holds admin-edited problem sets. Last write wins.
#[async_trait]
pub trait ProblemSetStore: Send + Sync {
    async fn find(
        &self,
        date: NaiveDate,
        difficulty: Difficulty,
    ) -> Result<Option<DailyProblemSet>, AppError>;

    async fn upsert(&self, set: DailyProblemSet) -> Result<DailyProblemSet, AppError>;

    /// Returns whether a set was removed.
    async fn delete(&self, date: NaiveDate, difficulty: Difficulty) -> Result<bool, AppError>;
}
