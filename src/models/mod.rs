// src/models/mod.rs

pub mod problem;
pub mod problem_set;
pub mod submission;
pub mod time_window;
