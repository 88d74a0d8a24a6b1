//! Geometric-mean midpoint between a high and a low price.

use crate::domain::{LevelError, round2};

/// Compute the geometric mean of `high` and `low`, rounded to two decimals.
///
/// The inputs are not required to be ordered; the mean is symmetric.
pub fn midpoint_level(high: f64, low: f64) -> Result<f64, LevelError> {
    if !high.is_finite() || !low.is_finite() {
        return Err(LevelError::NotANumber);
    }
    if high < 0.0 || low < 0.0 {
        return Err(LevelError::NegativePrice);
    }

    Ok(round2((high * low).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_matches_worked_example() {
        // sqrt(100 * 25) = sqrt(2500) = 50
        assert_eq!(midpoint_level(100.0, 25.0), Ok(50.0));
    }

    #[test]
    fn midpoint_is_symmetric() {
        assert_eq!(midpoint_level(25.0, 100.0), midpoint_level(100.0, 25.0));
    }

    #[test]
    fn zero_operand_gives_zero() {
        assert_eq!(midpoint_level(0.0, 123.45), Ok(0.0));
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        // sqrt(10 * 3) ~ 5.4772
        assert_eq!(midpoint_level(10.0, 3.0), Ok(5.48));
    }

    #[test]
    fn rejects_negative_prices() {
        assert_eq!(midpoint_level(-1.0, 25.0), Err(LevelError::NegativePrice));
        assert_eq!(midpoint_level(100.0, -25.0), Err(LevelError::NegativePrice));
    }

    #[test]
    fn rejects_non_finite_prices() {
        assert_eq!(midpoint_level(f64::NAN, 25.0), Err(LevelError::NotANumber));
        assert_eq!(
            midpoint_level(100.0, f64::INFINITY),
            Err(LevelError::NotANumber)
        );
    }
}
