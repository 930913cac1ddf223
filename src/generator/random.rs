// src/generator/random.rs

//! Stateless sine-based PRNG.
//!
//! `frac(sin(seed) * 10000)` has short-range correlation and is not uniform at
//! the bit level. It only needs to look varied across a session.

/// Maps a seed to a float in `[0, 1)`. Callers must vary the seed between draws.
pub fn seeded_random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    let frac = x - x.floor();
    // Rounding can land exactly on 1.0 for tiny negative x.
    if frac >= 1.0 { 0.0 } else { frac }
}

/// Draws an integer in `[min, max]` inclusive.
pub fn get_random_int(min: i64, max: i64, seed: i64) -> i64 {
    if max <= min {
        return min;
    }
    let span = (max - min + 1) as f64;
    (min + (seeded_random(seed) * span).floor() as i64).min(max)
}

/// Fisher-Yates shuffle driven by consecutive seeds starting at `seed`.
pub fn seeded_shuffle<T>(items: &mut [T], seed: i64) {
    for i in (1..items.len()).rev() {
        let j = get_random_int(0, i as i64, seed + i as i64) as usize;
        items.swap(i, j);
    }
}
