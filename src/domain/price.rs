use std::fmt;

use crate::config::LEVELS;

/// Error types for level calculations and input validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// The input text is not parseable as a number
    NotANumber,
    /// A whole-number level needs at least two digits
    TooFewDigits,
    /// Prices cannot be negative
    NegativePrice,
    /// The digit-sum residue matched no gate (unreachable for valid input,
    /// kept as a typed error rather than a panic)
    GateNotMatched,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::NotANumber => write!(f, "Please enter a valid number for the price."),
            LevelError::TooFewDigits => {
                write!(f, "Please enter a price with at least 2 digits.")
            }
            LevelError::NegativePrice => write!(f, "Price cannot be negative."),
            LevelError::GateNotMatched => {
                write!(f, "The sum of digits did not match any gate.")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Parse a whole-number price level for the ladder calculators.
///
/// The ladders work on the decimal digits of the level, so the input must be
/// an integer with at least two digits (>= 10). Negative values fail the same
/// check: there is no last-two-digit base to ladder from.
pub fn parse_whole_level(text: &str) -> Result<i64, LevelError> {
    let level: i64 = text.trim().parse().map_err(|_| LevelError::NotANumber)?;
    if level < LEVELS.min_whole_level {
        return Err(LevelError::TooFewDigits);
    }
    Ok(level)
}

/// Parse a non-negative price for the square-root calculators.
pub fn parse_price(text: &str) -> Result<f64, LevelError> {
    let price: f64 = text.trim().parse().map_err(|_| LevelError::NotANumber)?;
    if !price.is_finite() {
        return Err(LevelError::NotANumber);
    }
    if price < 0.0 {
        return Err(LevelError::NegativePrice);
    }
    Ok(price)
}

/// Round to two decimal places, the display precision for price levels.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
