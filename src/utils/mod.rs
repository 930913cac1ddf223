// src/utils/mod.rs

pub mod clock;
pub mod extract;
pub mod jwt;
pub mod time_gate;
