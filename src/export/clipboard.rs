//! Clipboard access for copying calculation results.

use anyhow::{Context as _, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
///
/// The clipboard backend may be unavailable (headless session, missing
/// display server); that surfaces as an error for the caller to report.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("clipboard backend unavailable")?;
    clipboard
        .set_text(text.to_owned())
        .context("could not copy to clipboard")
}
