// src/models/problem_set.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::problem::{Difficulty, ProblemSpec, ProblemType};

/// A problem set persisted for one (date, difficulty) pair.
/// Only written through the admin edit path; when absent the set is generated on the fly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProblemSet {
    pub date: NaiveDate,
    pub difficulty: Difficulty,
    pub problems: Vec<ProblemSpec>,
    pub is_edited: bool,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// One problem in an admin edit. `id` is optional and derived from position when missing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditedProblem {
    #[validate(length(min = 1, max = 100))]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub question: String,
    #[validate(range(min = 0))]
    pub answer: i64,
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
}

/// DTO for an admin overwriting a day's problem set.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProblemSetRequest {
    #[validate(custom(function = validate_problems))]
    pub problems: Vec<EditedProblem>,
}

fn validate_problems(problems: &[EditedProblem]) -> Result<(), validator::ValidationError> {
    if problems.is_empty() {
        return Err(validator::ValidationError::new("problems_cannot_be_empty"));
    }
    if problems.len() > 50 {
        return Err(validator::ValidationError::new("too_many_problems"));
    }
    for problem in problems {
        if problem.validate().is_err() {
            return Err(validator::ValidationError::new("invalid_problem"));
        }
    }
    Ok(())
}

impl EditProblemSetRequest {
    /// Converts the edit into canonical problems, filling in missing ids.
    pub fn into_problems(self) -> Vec<ProblemSpec> {
        self.problems
            .into_iter()
            .enumerate()
            .map(|(index, p)| ProblemSpec {
                id: p
                    .id
                    .unwrap_or_else(|| format!("edited_{}_{}", p.problem_type, index)),
                question: p.question,
                answer: p.answer,
                problem_type: p.problem_type,
            })
            .collect()
    }
}
