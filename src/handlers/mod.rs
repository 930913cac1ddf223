// src/handlers/mod.rs

pub mod admin;
pub mod problems;
pub mod time_window;
