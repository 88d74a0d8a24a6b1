//! Formatted calculation results.
//!
//! A report carries two strings: the text shown in the panel (also what
//! save-to-file writes, verbatim) and the text placed on the clipboard. They
//! differ only for the midpoint calculator, which copies the bare value.

use crate::domain::Sentiment;

/// The last successful calculation of a program panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultReport {
    display: String,
    clipboard: String,
}

impl ResultReport {
    /// Multi-line gate ladder report: sentiment header then one line per rung.
    pub fn gate_ladder(sentiment: Sentiment, rungs: &[i64]) -> Self {
        let mut display = format!("{} Levels:\n", sentiment);
        for (i, rung) in rungs.iter().enumerate() {
            display.push_str(&format!("Level {}: {}\n", i + 1, rung));
        }
        let clipboard = display.clone();
        Self { display, clipboard }
    }

    /// Three-rung step ladder report labelled by offset.
    pub fn step_ladder(rungs: &[i64; 3]) -> Self {
        let display = format!(
            "Level 3: {}\nLevel 6: {}\nLevel 9: {}",
            rungs[0], rungs[1], rungs[2]
        );
        let clipboard = display.clone();
        Self { display, clipboard }
    }

    /// Single reversal level report.
    pub fn reversal(sentiment: Sentiment, level: f64) -> Self {
        let display = format!("Final {} Price: {:.2}", sentiment, level);
        let clipboard = display.clone();
        Self { display, clipboard }
    }

    /// Midpoint report; the clipboard gets just the numeric value.
    pub fn midpoint(level: f64) -> Self {
        let value = format!("{:.2}", level);
        Self {
            display: format!("Result: {}", value),
            clipboard: value,
        }
    }

    /// Panel text; also the exact bytes written by save-to-file.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Clipboard payload.
    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_ladder_report_lists_every_rung() {
        let report = ResultReport::gate_ladder(Sentiment::Bullish, &[112, 124, 136]);
        assert_eq!(
            report.display(),
            "Bullish Levels:\nLevel 1: 112\nLevel 2: 124\nLevel 3: 136\n"
        );
        assert_eq!(report.clipboard(), report.display());
    }

    #[test]
    fn step_ladder_report_labels_rungs_by_offset() {
        let report = ResultReport::step_ladder(&[1053, 1059, 1068]);
        assert_eq!(report.display(), "Level 3: 1053\nLevel 6: 1059\nLevel 9: 1068");
        assert_eq!(report.clipboard(), report.display());
    }

    #[test]
    fn reversal_report_names_the_sentiment() {
        let report = ResultReport::reversal(Sentiment::Bearish, 64.0);
        assert_eq!(report.display(), "Final Bearish Price: 64.00");
    }

    #[test]
    fn midpoint_clipboard_is_the_bare_value() {
        let report = ResultReport::midpoint(50.0);
        assert_eq!(report.display(), "Result: 50.00");
        assert_eq!(report.clipboard(), "50.00");
    }
}
