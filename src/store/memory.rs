// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    models::{problem::Difficulty, problem_set::DailyProblemSet, time_window::TimeWindow},
    store::{ProblemSetStore, TimeWindowStore},
};

/// Process-local window store, seeded with the configured default.
#[derive(Debug)]
pub struct MemoryTimeWindowStore {
    window: RwLock<TimeWindow>,
}

impl MemoryTimeWindowStore {
    pub fn new(initial: TimeWindow) -> Self {
        Self {
            window: RwLock::new(initial),
        }
    }
}

#[async_trait]
impl TimeWindowStore for MemoryTimeWindowStore {
    async fn get(&self) -> Result<TimeWindow, AppError> {
        Ok(*self.window.read().await)
    }

    async fn set(&self, window: TimeWindow) -> Result<TimeWindow, AppError> {
        *self.window.write().await = window;
        Ok(window)
    }
}

#[derive(Debug, Default)]
pub struct MemoryProblemSetStore {
    sets: RwLock<HashMap<(NaiveDate, Difficulty), DailyProblemSet>>,
}

impl MemoryProblemSetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProblemSetStore for MemoryProblemSetStore {
    async fn find(
        &self,
        date: NaiveDate,
        difficulty: Difficulty,
    ) -> Result<Option<DailyProblemSet>, AppError> {
        Ok(self.sets.read().await.get(&(date, difficulty)).cloned())
    }

    async fn upsert(&self, mut set: DailyProblemSet) -> Result<DailyProblemSet, AppError> {
        set.updated_at = Some(chrono::Utc::now());
        self.sets
            .write()
            .await
            .insert((set.date, set.difficulty), set.clone());
        Ok(set)
    }

    async fn delete(&self, date: NaiveDate, difficulty: Difficulty) -> Result<bool, AppError> {
        Ok(self.sets.write().await.remove(&(date, difficulty)).is_some())
    }
}
