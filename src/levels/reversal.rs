//! Square-root reversal level.

use crate::config::LEVELS;
use crate::domain::{LevelError, Sentiment, round2};

/// Compute the single reversal level for `price`.
///
/// The square root is shifted by the configured offset (added for bullish,
/// subtracted for bearish) and squared back, rounded to two decimals. A
/// bearish shift on a price below 4 takes the root negative; squaring makes
/// the level positive again, so the result is still well-defined.
pub fn reversal_level(price: f64, sentiment: Sentiment) -> Result<f64, LevelError> {
    if !price.is_finite() {
        return Err(LevelError::NotANumber);
    }
    if price < 0.0 {
        return Err(LevelError::NegativePrice);
    }

    let root = price.sqrt() + sentiment.signed_f64(LEVELS.reversal.root_offset);
    Ok(round2(root * root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_matches_worked_example() {
        // sqrt(100) = 10; (10 + 2)^2 = 144, (10 - 2)^2 = 64
        assert_eq!(reversal_level(100.0, Sentiment::Bullish), Ok(144.0));
        assert_eq!(reversal_level(100.0, Sentiment::Bearish), Ok(64.0));
    }

    #[test]
    fn zero_price_is_legal() {
        assert_eq!(reversal_level(0.0, Sentiment::Bullish), Ok(4.0));
        assert_eq!(reversal_level(0.0, Sentiment::Bearish), Ok(4.0));
    }

    #[test]
    fn bearish_below_four_squares_back_positive() {
        // sqrt(2.25) = 1.5; (1.5 - 2)^2 = 0.25
        assert_eq!(reversal_level(2.25, Sentiment::Bearish), Ok(0.25));
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        // sqrt(50) ~ 7.0711; (7.0711 + 2)^2 ~ 82.2843
        assert_eq!(reversal_level(50.0, Sentiment::Bullish), Ok(82.28));
    }

    #[test]
    fn rejects_negative_and_non_finite_prices() {
        assert_eq!(
            reversal_level(-1.0, Sentiment::Bullish),
            Err(LevelError::NegativePrice)
        );
        assert_eq!(
            reversal_level(f64::NAN, Sentiment::Bullish),
            Err(LevelError::NotANumber)
        );
        assert_eq!(
            reversal_level(f64::INFINITY, Sentiment::Bearish),
            Err(LevelError::NotANumber)
        );
    }
}
