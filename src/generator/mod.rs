// src/generator/mod.rs

//! Deterministic daily problem generation.
//!
//! Everything here is a pure function of the calendar date and the difficulty
//! tier: the same inputs always produce the same problems in the same order.
//! The PRNG is a reproducibility mechanism only and must not be used where
//! unpredictability matters.

pub mod assembler;
pub mod difficulty;
pub mod random;
pub mod seed;
pub mod synthesizer;

pub use assembler::{ProblemSet, Shortfall, generate_for_date, generate_problem_set};
pub use difficulty::{DifficultyProfile, profile_for, profile_for_name};
pub use seed::daily_seed;
pub use synthesizer::generate_specific_problem;
