// src/models/submission.rs

use serde::{Deserialize, Serialize};

/// Query parameters for fetching today's problems.
#[derive(Debug, Deserialize)]
pub struct ProblemsQuery {
    pub difficulty: Option<String>,
}

/// DTO for submitting answers.
///
/// Answers are matched index-for-index against the canonical set that the
/// server re-derives; no problem payload from the client is trusted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: Vec<String>,
    pub difficulty: Option<String>,
    /// Seconds the player took, reported by the client.
    pub time_to_complete: Option<f64>,
}

/// Per-problem grading outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemResult {
    pub id: String,
    /// The canonical answer.
    pub correct: i64,
    pub user_answer: Option<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub total_problems: usize,
    /// 0..=100.
    pub score: u32,
    pub results: Vec<ProblemResult>,
}
