//! Saving result reports to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{SAVE_DEFAULT_FILENAME, SAVE_EXTENSION, SAVE_FILTER_NAME};

/// Ask the user where to save a report.
///
/// Blocks on the native save dialog; returns `None` if the user cancels.
pub fn prompt_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter(SAVE_FILTER_NAME, &[SAVE_EXTENSION])
        .set_file_name(SAVE_DEFAULT_FILENAME)
        .save_file()
}

/// Write a report's display text to `path`, verbatim, UTF-8.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("could not write results to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_report_round_trips_utf8_verbatim() {
        let path = std::env::temp_dir().join("gann_levels_write_report_test.txt");
        let contents = "Bullish Levels:\nLevel 1: 1068\n";

        write_report(&path, contents).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_report_reports_the_failing_path() {
        let path = Path::new("/nonexistent-dir/gann_levels_test.txt");
        let err = write_report(path, "x").unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir"));
    }
}
