// src/generator/assembler.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    config::RETRY_MULTIPLIER,
    generator::{
        difficulty::{DifficultyProfile, profile_for},
        random::seeded_shuffle,
        seed::daily_seed,
        synthesizer::{SEEDS_PER_ATTEMPT, generate_specific_problem},
    },
    models::problem::{Difficulty, ProblemSpec, ProblemType},
};

/// A problem type that ran out of attempts before reaching its quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    pub problem_type: ProblemType,
    pub required: usize,
    pub generated: usize,
    pub attempts: usize,
}

/// Result of assembling a set. Shortfalls are soft: the set is still usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemSet {
    pub problems: Vec<ProblemSpec>,
    pub shortfalls: Vec<Shortfall>,
}

impl ProblemSet {
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

/// Assembles and shuffles the problem set for `profile` from a base seed.
///
/// Each quota gets at most `RETRY_MULTIPLIER * count` attempts. A quota that
/// cannot be filled is logged and kept short; generation never fails.
pub fn generate_problem_set(profile: &DifficultyProfile, seed: i64) -> ProblemSet {
    let mut problems = Vec::with_capacity(profile.total_count());
    let mut shortfalls = Vec::new();
    let mut cursor = seed;

    for quota in &profile.quotas {
        let max_attempts = quota.count * RETRY_MULTIPLIER;
        let mut generated = 0;
        let mut attempts = 0;

        while generated < quota.count && attempts < max_attempts {
            attempts += 1;
            if let Some(problem) = generate_specific_problem(quota.problem_type, profile, cursor) {
                problems.push(problem);
                generated += 1;
            }
            cursor += SEEDS_PER_ATTEMPT;
        }

        if generated < quota.count {
            tracing::warn!(
                problem_type = %quota.problem_type,
                required = quota.count,
                generated,
                attempts,
                "Problem generation shortfall"
            );
            shortfalls.push(Shortfall {
                problem_type: quota.problem_type,
                required: quota.count,
                generated,
                attempts,
            });
        }
    }

    seeded_shuffle(&mut problems, cursor);

    ProblemSet {
        problems,
        shortfalls,
    }
}

/// The canonical set for a tier on a calendar day.
pub fn generate_for_date(difficulty: Difficulty, date: NaiveDate) -> ProblemSet {
    generate_problem_set(&profile_for(difficulty), daily_seed(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::PROBLEM_SET_SIZE,
        generator::difficulty::{OperandBounds, OperandRange, ProblemQuota, profile_for_name},
    };
    use std::collections::HashMap;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn same_day_is_deterministic() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                generate_for_date(difficulty, date()),
                generate_for_date(difficulty, date())
            );
        }
    }

    #[test]
    fn different_days_differ() {
        let next = date().succ_opt().unwrap();
        assert_ne!(
            generate_for_date(Difficulty::Beginner, date()).problems,
            generate_for_date(Difficulty::Beginner, next).problems
        );
    }

    #[test]
    fn full_sets_over_many_days() {
        let mut day = date();
        for _ in 0..60 {
            for difficulty in Difficulty::ALL {
                let set = generate_for_date(difficulty, day);
                assert_eq!(set.problems.len(), PROBLEM_SET_SIZE, "{} on {}", difficulty, day);
                assert!(set.is_complete());
                let ceiling = profile_for(difficulty).max_result_value;
                assert!(set.problems.iter().all(|p| p.answer >= 0 && p.answer <= ceiling));
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn intermediate_type_composition() {
        let set = generate_for_date(Difficulty::Intermediate, date());
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for p in &set.problems {
            *counts.entry(p.problem_type.as_str()).or_default() += 1;
        }
        assert_eq!(set.problems.len(), 10);
        assert_eq!(counts["add_subtract_4digit"], 3);
        assert_eq!(counts["multiply_2digit_2digit"], 2);
        assert_eq!(counts["multiply_3digit_2digit"], 3);
        assert_eq!(counts["divide_3digit_1digit"], 2);
    }

    #[test]
    fn ids_are_unique_within_a_set() {
        let set = generate_for_date(Difficulty::Expert, date());
        let mut ids: Vec<&str> = set.problems.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), set.problems.len());
    }

    #[test]
    fn fallback_profile_still_yields_problems() {
        let set = generate_problem_set(&profile_for_name("bogus"), 12345);
        assert_eq!(set.problems.len(), PROBLEM_SET_SIZE);
        assert!(
            set.problems
                .iter()
                .all(|p| p.problem_type == ProblemType::AddSubtract2Digit)
        );
    }

    #[test]
    fn impossible_quota_reports_shortfall_without_failing() {
        // Every 3-digit product exceeds a ceiling of 10, so nothing is accepted.
        let profile = DifficultyProfile {
            rank: None,
            quotas: vec![
                ProblemQuota {
                    problem_type: ProblemType::Multiply3Digit3Digit,
                    count: 2,
                    bounds: OperandBounds {
                        first: OperandRange { min: 100, max: 999 },
                        second: OperandRange { min: 100, max: 999 },
                        dividend: None,
                    },
                },
                ProblemQuota {
                    problem_type: ProblemType::AddSubtract2Digit,
                    count: 3,
                    bounds: OperandBounds {
                        first: OperandRange { min: 1, max: 5 },
                        second: OperandRange { min: 1, max: 5 },
                        dividend: None,
                    },
                },
            ],
            max_result_value: 10,
        };

        let set = generate_problem_set(&profile, 99);
        assert_eq!(set.problems.len(), 3);
        assert_eq!(
            set.shortfalls,
            vec![Shortfall {
                problem_type: ProblemType::Multiply3Digit3Digit,
                required: 2,
                generated: 0,
                attempts: 2 * RETRY_MULTIPLIER,
            }]
        );
    }
}
