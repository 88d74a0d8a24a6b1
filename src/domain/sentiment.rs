use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Sign selector for whether level offsets are added or subtracted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Sentiment {
    Bullish,
    Bearish,
}

impl Sentiment {
    /// Apply the sentiment's sign to an integer step.
    pub fn signed(self, step: i64) -> i64 {
        match self {
            Sentiment::Bullish => step,
            Sentiment::Bearish => -step,
        }
    }

    /// Apply the sentiment's sign to a float offset.
    pub fn signed_f64(self, offset: f64) -> f64 {
        match self {
            Sentiment::Bullish => offset,
            Sentiment::Bearish => -offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_flips_for_bearish() {
        assert_eq!(Sentiment::Bullish.signed(12), 12);
        assert_eq!(Sentiment::Bearish.signed(12), -12);
        assert_eq!(Sentiment::Bullish.signed_f64(2.0), 2.0);
        assert_eq!(Sentiment::Bearish.signed_f64(2.0), -2.0);
    }

    #[test]
    fn display_uses_variant_names() {
        assert_eq!(Sentiment::Bullish.to_string(), "Bullish");
        assert_eq!(Sentiment::Bearish.to_string(), "Bearish");
    }
}
