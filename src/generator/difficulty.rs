// src/generator/difficulty.rs

use serde::Serialize;

use crate::{
    config::PROBLEM_SET_SIZE,
    models::problem::{Difficulty, ProblemType},
};

/// Inclusive bounds for a single drawn value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperandRange {
    pub min: i64,
    pub max: i64,
}

const fn range(min: i64, max: i64) -> OperandRange {
    OperandRange { min, max }
}

const ONE_DIGIT: OperandRange = range(2, 9);
const TWO_DIGIT: OperandRange = range(10, 99);
const THREE_DIGIT: OperandRange = range(100, 999);
const FOUR_DIGIT: OperandRange = range(1_000, 9_999);
const FIVE_DIGIT: OperandRange = range(10_000, 99_999);
const SIX_DIGIT: OperandRange = range(100_000, 999_999);

/// Operand bounds for one problem type.
///
/// For division types `first` is the divisor and `second` the quotient; the
/// dividend is always their product and must fall inside `dividend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperandBounds {
    pub first: OperandRange,
    pub second: OperandRange,
    pub dividend: Option<OperandRange>,
}

const fn bounds(first: OperandRange, second: OperandRange) -> OperandBounds {
    OperandBounds {
        first,
        second,
        dividend: None,
    }
}

const fn division(divisor: OperandRange, quotient: OperandRange, dividend: OperandRange) -> OperandBounds {
    OperandBounds {
        first: divisor,
        second: quotient,
        dividend: Some(dividend),
    }
}

/// How many problems of a type a tier asks for, and how large they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemQuota {
    pub problem_type: ProblemType,
    pub count: usize,
    pub bounds: OperandBounds,
}

const fn quota(problem_type: ProblemType, count: usize, bounds: OperandBounds) -> ProblemQuota {
    ProblemQuota {
        problem_type,
        count,
        bounds,
    }
}

/// Static generation parameters for a tier.
///
/// `quotas` is ordered; the assembler walks it front to back so the seed
/// sequence is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyProfile {
    /// `None` for the fallback profile served for unknown names.
    pub rank: Option<Difficulty>,
    pub quotas: Vec<ProblemQuota>,
    pub max_result_value: i64,
}

impl DifficultyProfile {
    pub fn total_count(&self) -> usize {
        self.quotas.iter().map(|q| q.count).sum()
    }

    pub fn bounds_for(&self, problem_type: ProblemType) -> Option<OperandBounds> {
        self.quotas
            .iter()
            .find(|q| q.problem_type == problem_type)
            .map(|q| q.bounds)
    }
}

pub fn profile_for(difficulty: Difficulty) -> DifficultyProfile {
    use ProblemType::*;

    let (quotas, max_result_value) = match difficulty {
        Difficulty::Beginner => (
            vec![
                quota(AddSubtract2Digit, 4, bounds(TWO_DIGIT, TWO_DIGIT)),
                quota(AddSubtract3Digit, 3, bounds(THREE_DIGIT, THREE_DIGIT)),
                quota(Multiply2Digit1Digit, 3, bounds(TWO_DIGIT, ONE_DIGIT)),
            ],
            1_000,
        ),
        Difficulty::Intermediate => (
            vec![
                quota(AddSubtract4Digit, 3, bounds(FOUR_DIGIT, FOUR_DIGIT)),
                quota(Multiply2Digit2Digit, 2, bounds(TWO_DIGIT, TWO_DIGIT)),
                quota(Multiply3Digit2Digit, 3, bounds(THREE_DIGIT, TWO_DIGIT)),
                quota(Divide3Digit1Digit, 2, division(ONE_DIGIT, range(12, 111), THREE_DIGIT)),
            ],
            100_000,
        ),
        Difficulty::Advanced => (
            vec![
                quota(AddSubtract5Digit, 2, bounds(FIVE_DIGIT, FIVE_DIGIT)),
                quota(Multiply3Digit3Digit, 3, bounds(THREE_DIGIT, THREE_DIGIT)),
                quota(Multiply4Digit2Digit, 2, bounds(FOUR_DIGIT, TWO_DIGIT)),
                quota(Divide4Digit2Digit, 3, division(range(11, 99), range(12, 99), FOUR_DIGIT)),
            ],
            1_000_000,
        ),
        Difficulty::Expert => (
            vec![
                quota(AddSubtract6Digit, 2, bounds(SIX_DIGIT, SIX_DIGIT)),
                quota(Multiply4Digit3Digit, 3, bounds(FOUR_DIGIT, THREE_DIGIT)),
                quota(Multiply4Digit4Digit, 2, bounds(FOUR_DIGIT, FOUR_DIGIT)),
                quota(Divide5Digit2Digit, 3, division(range(11, 99), range(100, 999), FIVE_DIGIT)),
            ],
            1_000_000_000,
        ),
    };

    DifficultyProfile {
        rank: Some(difficulty),
        quotas,
        max_result_value,
    }
}

/// Minimal single-type profile used when the tier name is not recognised.
pub fn fallback_profile() -> DifficultyProfile {
    DifficultyProfile {
        rank: None,
        quotas: vec![quota(
            ProblemType::AddSubtract2Digit,
            PROBLEM_SET_SIZE,
            bounds(TWO_DIGIT, TWO_DIGIT),
        )],
        max_result_value: 1_000,
    }
}

/// Looks up a tier by name. Unknown names get the fallback profile instead of an error.
pub fn profile_for_name(name: &str) -> DifficultyProfile {
    match name.parse::<Difficulty>() {
        Ok(difficulty) => profile_for(difficulty),
        Err(unknown) => {
            tracing::warn!("Unknown difficulty '{}', using fallback profile", unknown);
            fallback_profile()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_sums_to_set_size() {
        for difficulty in Difficulty::ALL {
            assert_eq!(profile_for(difficulty).total_count(), PROBLEM_SET_SIZE);
        }
        assert_eq!(fallback_profile().total_count(), PROBLEM_SET_SIZE);
    }

    #[test]
    fn ceilings_strictly_increase() {
        let ceilings: Vec<i64> = Difficulty::ALL
            .into_iter()
            .map(|d| profile_for(d).max_result_value)
            .collect();
        assert_eq!(ceilings, vec![1_000, 100_000, 1_000_000, 1_000_000_000]);
    }

    #[test]
    fn intermediate_composition() {
        let profile = profile_for(Difficulty::Intermediate);
        let composition: Vec<(&str, usize)> = profile
            .quotas
            .iter()
            .map(|q| (q.problem_type.as_str(), q.count))
            .collect();
        assert_eq!(
            composition,
            vec![
                ("add_subtract_4digit", 3),
                ("multiply_2digit_2digit", 2),
                ("multiply_3digit_2digit", 3),
                ("divide_3digit_1digit", 2),
            ]
        );
    }

    #[test]
    fn unknown_name_falls_back() {
        let profile = profile_for_name("bogus");
        assert_eq!(profile.rank, None);
        assert_eq!(profile.quotas.len(), 1);
        assert_eq!(profile.quotas[0].problem_type, ProblemType::AddSubtract2Digit);

        assert_eq!(profile_for_name("advanced").rank, Some(Difficulty::Advanced));
    }

    #[test]
    fn bounds_lookup() {
        let profile = profile_for(Difficulty::Beginner);
        assert_eq!(
            profile.bounds_for(ProblemType::Multiply2Digit1Digit),
            Some(bounds(TWO_DIGIT, ONE_DIGIT))
        );
        assert_eq!(profile.bounds_for(ProblemType::Divide5Digit2Digit), None);
    }

    #[test]
    fn division_types_carry_dividend_range() {
        let expected = [
            (Difficulty::Intermediate, ProblemType::Divide3Digit1Digit, THREE_DIGIT),
            (Difficulty::Advanced, ProblemType::Divide4Digit2Digit, FOUR_DIGIT),
            (Difficulty::Expert, ProblemType::Divide5Digit2Digit, FIVE_DIGIT),
        ];
        for (difficulty, problem_type, dividend) in expected {
            let bounds = profile_for(difficulty).bounds_for(problem_type).unwrap();
            assert_eq!(bounds.dividend, Some(dividend));
        }
        assert_eq!(
            profile_for(Difficulty::Beginner)
                .bounds_for(ProblemType::AddSubtract2Digit)
                .unwrap()
                .dividend,
            None
        );
    }
}
