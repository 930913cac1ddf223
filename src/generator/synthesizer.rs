// src/generator/synthesizer.rs

use crate::{
    generator::{
        difficulty::{DifficultyProfile, OperandRange},
        random::get_random_int,
    },
    models::problem::{ProblemFamily, ProblemSpec, ProblemType},
};

/// Number of consecutive seeds a single synthesis attempt consumes.
pub const SEEDS_PER_ATTEMPT: i64 = 3;

fn draw(range: OperandRange, seed: i64) -> i64 {
    get_random_int(range.min, range.max, seed)
}

/// Builds one problem of `problem_type` from `seed`, `seed + 1` and `seed + 2`.
///
/// Returns `None` when the type is not part of the profile, the answer falls
/// outside `0..=max_result_value`, or a dividend misses its digit range; the
/// caller retries with another seed.
pub fn generate_specific_problem(
    problem_type: ProblemType,
    profile: &DifficultyProfile,
    seed: i64,
) -> Option<ProblemSpec> {
    let bounds = profile.bounds_for(problem_type)?;

    let (question, answer) = match problem_type.family() {
        ProblemFamily::Additive => {
            let mut a = draw(bounds.first, seed);
            let mut b = draw(bounds.second, seed + 1);
            if get_random_int(0, 1, seed + 2) == 0 {
                (format!("{} + {}", a, b), a.checked_add(b)?)
            } else {
                // Subtraction never goes negative.
                if a < b {
                    std::mem::swap(&mut a, &mut b);
                }
                (format!("{} - {}", a, b), a - b)
            }
        }
        ProblemFamily::Multiplicative => {
            let a = draw(bounds.first, seed);
            let b = draw(bounds.second, seed + 1);
            (format!("{} × {}", a, b), a.checked_mul(b)?)
        }
        ProblemFamily::Division => {
            // Built from divisor and quotient so the division is always exact.
            let divisor = draw(bounds.first, seed);
            let quotient = draw(bounds.second, seed + 1);
            if divisor == 0 {
                return None;
            }
            let dividend = divisor.checked_mul(quotient)?;
            if bounds
                .dividend
                .is_some_and(|range| dividend < range.min || dividend > range.max)
            {
                return None;
            }
            (format!("{} ÷ {}", dividend, divisor), quotient)
        }
    };

    if answer < 0 || answer > profile.max_result_value {
        return None;
    }

    Some(ProblemSpec {
        id: format!("{}_{}", problem_type, seed),
        question,
        answer,
        problem_type,
    })
}
