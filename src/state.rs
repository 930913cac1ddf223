use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    store::{
        MemoryProblemSetStore, MemoryTimeWindowStore, ProblemSetStore, TimeWindowStore,
    },
    utils::clock::{Clock, SystemClock},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub time_windows: Arc<dyn TimeWindowStore>,
    pub problem_sets: Arc<dyn ProblemSetStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State backed by in-memory stores and the system clock.
    pub fn in_memory(config: Config) -> Self {
        Self {
            time_windows: Arc::new(MemoryTimeWindowStore::new(config.default_time_window)),
            problem_sets: Arc::new(MemoryProblemSetStore::new()),
            clock: Arc::new(SystemClock),
            config,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
