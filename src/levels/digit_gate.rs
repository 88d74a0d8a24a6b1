//! Digit-gate ladder: digit-sum reduction selects a gate step, the step is
//! projected out ten times from the input level.

use crate::config::LEVELS;
use crate::domain::{LevelError, Sentiment};

/// Repeatedly sum the decimal digits of `n` until a single digit remains.
///
/// For any positive input the reduction terminates in 1-9.
pub fn digit_sum(n: i64) -> i64 {
    debug_assert!(n > 0, "digit_sum expects a positive level");
    let mut n = n;
    while n >= 10 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

/// Map a digit-sum residue to its gate step size.
///
/// Residues 1/4/7 gate at 12, 2/5/8 at 15, 3/6/9 at 18. The fallthrough arm
/// cannot fire for a residue produced by [`digit_sum`] on a positive level;
/// it reports a typed error instead of panicking.
pub fn gate_step(residue: i64) -> Result<i64, LevelError> {
    match residue {
        1 | 4 | 7 => Ok(LEVELS.gate_ladder.step_low),
        2 | 5 | 8 => Ok(LEVELS.gate_ladder.step_mid),
        3 | 6 | 9 => Ok(LEVELS.gate_ladder.step_high),
        _ => Err(LevelError::GateNotMatched),
    }
}

/// Project a ladder of levels from `level` with the gate step for its
/// digit-sum residue.
///
/// The first rung is `level` plus (bullish) or minus (bearish) the step; the
/// input itself is not a rung.
pub fn gate_ladder(level: i64, sentiment: Sentiment) -> Result<Vec<i64>, LevelError> {
    if level < LEVELS.min_whole_level {
        return Err(LevelError::TooFewDigits);
    }

    let step = sentiment.signed(gate_step(digit_sum(level))?);

    let mut rungs = Vec::with_capacity(LEVELS.gate_ladder.rung_count);
    let mut current = level;
    for _ in 0..LEVELS.gate_ladder.rung_count {
        current += step;
        rungs.push(current);
    }
    Ok(rungs)
}
