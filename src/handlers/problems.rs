// src/handlers/problems.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use crate::{
    error::AppError,
    generator::generate_for_date,
    models::{
        problem::{Difficulty, ProblemSpec, PublicProblem},
        submission::{ProblemResult, ProblemsQuery, SubmissionResult, SubmitAnswersRequest},
        time_window::TimeWindow,
    },
    state::AppState,
    utils::{
        extract::AppJson,
        jwt::Caller,
        time_gate::{GateContext, ensure_open},
    },
};

/// Parses a tier name, rejecting anything outside the four valid tiers.
pub(crate) fn parse_difficulty(raw: Option<&str>) -> Result<Difficulty, AppError> {
    let raw = raw.unwrap_or_default();
    raw.parse::<Difficulty>()
        .map_err(|_| AppError::InvalidDifficulty(raw.to_string()))
}

/// Loads the window and checks the gate for this caller.
async fn check_gate(
    state: &AppState,
    caller: &Caller,
) -> Result<(TimeWindow, NaiveDateTime), AppError> {
    let window = state.time_windows.get().await?;
    let now = state.clock.now();

    ensure_open(&GateContext {
        now,
        window,
        is_privileged: caller.is_privileged(),
        development_mode: state.config.development_mode,
    })?;

    Ok((window, now))
}

/// The canonical problems for (date, difficulty): an admin-edited set when one
/// exists, otherwise the deterministic generated set.
/// Returns the problems and whether they came from an edit.
pub(crate) async fn canonical_problems(
    state: &AppState,
    date: NaiveDate,
    difficulty: Difficulty,
) -> Result<(Vec<ProblemSpec>, bool), AppError> {
    if let Some(stored) = state.problem_sets.find(date, difficulty).await? {
        return Ok((stored.problems, stored.is_edited));
    }
    Ok((generate_for_date(difficulty, date).problems, false))
}

/// Grades answers index-for-index against the canonical problems.
///
/// Answers are trimmed and parsed as integers; missing or unparsable answers
/// count as incorrect. Extra answers are ignored.
pub fn grade_answers(problems: &[ProblemSpec], answers: &[String]) -> SubmissionResult {
    let results: Vec<ProblemResult> = problems
        .iter()
        .enumerate()
        .map(|(index, problem)| {
            let user_answer = answers.get(index).cloned();
            let is_correct = user_answer
                .as_deref()
                .and_then(|a| a.trim().parse::<i64>().ok())
                == Some(problem.answer);
            ProblemResult {
                id: problem.id.clone(),
                correct: problem.answer,
                user_answer,
                is_correct,
            }
        })
        .collect();

    let total_problems = results.len();
    let correct_answers = results.iter().filter(|r| r.is_correct).count();
    let score = if total_problems == 0 {
        0
    } else {
        ((correct_answers as f64 / total_problems as f64) * 100.0).round() as u32
    };

    SubmissionResult {
        correct_answers,
        incorrect_answers: total_problems - correct_answers,
        total_problems,
        score,
        results,
    }
}

/// Returns today's problems (without answers) for a difficulty.
///
/// * 400 for an unknown difficulty.
/// * 403 outside the time window unless the caller may bypass it.
pub async fn get_problems(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<ProblemsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let difficulty = parse_difficulty(params.difficulty.as_deref())?;
    let (window, now) = check_gate(&state, &caller).await?;

    let date = now.date();
    let (problems, is_edited) = canonical_problems(&state, date, difficulty).await?;
    let public: Vec<PublicProblem> = problems.iter().map(PublicProblem::from).collect();

    tracing::debug!(%difficulty, %date, count = public.len(), "Served problem set");

    Ok(Json(json!({
        "success": true,
        "problems": public,
        "difficulty": difficulty,
        "date": date,
        "isEdited": is_edited,
        "timeWindow": window.view(),
    })))
}

/// Grades a submission against the set re-derived on the server.
pub async fn submit_answers(
    State(state): State<AppState>,
    caller: Caller,
    AppJson(req): AppJson<SubmitAnswersRequest>,
) -> Result<impl IntoResponse, AppError> {
    let difficulty = parse_difficulty(req.difficulty.as_deref())?;
    let (_, now) = check_gate(&state, &caller).await?;

    let (problems, _) = canonical_problems(&state, now.date(), difficulty).await?;
    let result = grade_answers(&problems, &req.answers);

    tracing::info!(
        %difficulty,
        score = result.score,
        correct = result.correct_answers,
        total = result.total_problems,
        "Answers graded"
    );

    let mut body = serde_json::to_value(&result)?;
    body["success"] = json!(true);
    body["timeToComplete"] = json!(req.time_to_complete);
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::problem::ProblemType;

    fn problems(answers: &[i64]) -> Vec<ProblemSpec> {
        answers
            .iter()
            .enumerate()
            .map(|(i, a)| ProblemSpec {
                id: format!("p{}", i),
                question: format!("{} + 0", a),
                answer: *a,
                problem_type: ProblemType::AddSubtract2Digit,
            })
            .collect()
    }

    fn answers(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_grade_perfect() {
        let result = grade_answers(&problems(&[10, 20]), &answers(&["10", " 20 "]));
        assert_eq!(result.correct_answers, 2);
        assert_eq!(result.incorrect_answers, 0);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_grade_missing_and_garbage() {
        let result = grade_answers(&problems(&[1, 2, 3]), &answers(&["1", "two"]));
        assert_eq!(result.total_problems, 3);
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.incorrect_answers, 2);
        assert_eq!(result.score, 33);
        assert_eq!(result.results[1].user_answer.as_deref(), Some("two"));
        assert_eq!(result.results[2].user_answer, None);
        assert_eq!(result.results[2].correct, 3);
    }

    #[test]
    fn test_grade_is_positional() {
        // Right values in the wrong order score nothing.
        let result = grade_answers(&problems(&[5, 6]), &answers(&["6", "5", "5"]));
        assert_eq!(result.correct_answers, 0);
        assert_eq!(result.total_problems, 2);
    }

    #[test]
    fn test_grade_rounds_score() {
        let result = grade_answers(&problems(&[1, 2, 3]), &answers(&["1", "2", "0"]));
        assert_eq!(result.score, 67);
        assert_eq!(grade_answers(&[], &answers(&["1"])).score, 0);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty(Some("beginner")).unwrap(), Difficulty::Beginner);
        assert!(matches!(
            parse_difficulty(Some("bogus")),
            Err(AppError::InvalidDifficulty(d)) if d == "bogus"
        ));
        assert!(matches!(parse_difficulty(None), Err(AppError::InvalidDifficulty(_))));
    }
}
