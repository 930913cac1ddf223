// src/models/problem.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The four fixed difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }

    /// Wire names of every valid tier, in ascending order.
    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Difficulty::as_str).collect()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// How a problem type computes its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFamily {
    Additive,
    Multiplicative,
    Division,
}

/// Every problem type that the difficulty tiers can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemType {
    #[serde(rename = "add_subtract_2digit")]
    AddSubtract2Digit,
    #[serde(rename = "add_subtract_3digit")]
    AddSubtract3Digit,
    #[serde(rename = "add_subtract_4digit")]
    AddSubtract4Digit,
    #[serde(rename = "add_subtract_5digit")]
    AddSubtract5Digit,
    #[serde(rename = "add_subtract_6digit")]
    AddSubtract6Digit,
    #[serde(rename = "multiply_2digit_1digit")]
    Multiply2Digit1Digit,
    #[serde(rename = "multiply_2digit_2digit")]
    Multiply2Digit2Digit,
    #[serde(rename = "multiply_3digit_2digit")]
    Multiply3Digit2Digit,
    #[serde(rename = "multiply_3digit_3digit")]
    Multiply3Digit3Digit,
    #[serde(rename = "multiply_4digit_2digit")]
    Multiply4Digit2Digit,
    #[serde(rename = "multiply_4digit_3digit")]
    Multiply4Digit3Digit,
    #[serde(rename = "multiply_4digit_4digit")]
    Multiply4Digit4Digit,
    #[serde(rename = "divide_3digit_1digit")]
    Divide3Digit1Digit,
    #[serde(rename = "divide_4digit_2digit")]
    Divide4Digit2Digit,
    #[serde(rename = "divide_5digit_2digit")]
    Divide5Digit2Digit,
}

impl ProblemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::AddSubtract2Digit => "add_subtract_2digit",
            ProblemType::AddSubtract3Digit => "add_subtract_3digit",
            ProblemType::AddSubtract4Digit => "add_subtract_4digit",
            ProblemType::AddSubtract5Digit => "add_subtract_5digit",
            ProblemType::AddSubtract6Digit => "add_subtract_6digit",
            ProblemType::Multiply2Digit1Digit => "multiply_2digit_1digit",
            ProblemType::Multiply2Digit2Digit => "multiply_2digit_2digit",
            ProblemType::Multiply3Digit2Digit => "multiply_3digit_2digit",
            ProblemType::Multiply3Digit3Digit => "multiply_3digit_3digit",
            ProblemType::Multiply4Digit2Digit => "multiply_4digit_2digit",
            ProblemType::Multiply4Digit3Digit => "multiply_4digit_3digit",
            ProblemType::Multiply4Digit4Digit => "multiply_4digit_4digit",
            ProblemType::Divide3Digit1Digit => "divide_3digit_1digit",
            ProblemType::Divide4Digit2Digit => "divide_4digit_2digit",
            ProblemType::Divide5Digit2Digit => "divide_5digit_2digit",
        }
    }

    pub fn family(&self) -> ProblemFamily {
        match self {
            ProblemType::AddSubtract2Digit
            | ProblemType::AddSubtract3Digit
            | ProblemType::AddSubtract4Digit
            | ProblemType::AddSubtract5Digit
            | ProblemType::AddSubtract6Digit => ProblemFamily::Additive,
            ProblemType::Multiply2Digit1Digit
            | ProblemType::Multiply2Digit2Digit
            | ProblemType::Multiply3Digit2Digit
            | ProblemType::Multiply3Digit3Digit
            | ProblemType::Multiply4Digit2Digit
            | ProblemType::Multiply4Digit3Digit
            | ProblemType::Multiply4Digit4Digit => ProblemFamily::Multiplicative,
            ProblemType::Divide3Digit1Digit
            | ProblemType::Divide4Digit2Digit
            | ProblemType::Divide5Digit2Digit => ProblemFamily::Division,
        }
    }
}

impl fmt::Display for ProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single arithmetic question with its canonical answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSpec {
    pub id: String,
    pub question: String,
    pub answer: i64,
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
}

/// DTO for sending a problem to the player (excludes the answer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProblem {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
}

impl From<&ProblemSpec> for PublicProblem {
    fn from(spec: &ProblemSpec) -> Self {
        Self {
            id: spec.id.clone(),
            question: spec.question.clone(),
            problem_type: spec.problem_type,
        }
    }
}
