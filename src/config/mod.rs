//! Configuration module for the gann-levels application.

pub mod levels;

mod debug; // Can be private now because we have a public re-export. Forces files to use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use levels::LEVELS;
pub use persistence::{APP_STATE_PATH, SAVE_DEFAULT_FILENAME, SAVE_EXTENSION, SAVE_FILTER_NAME};
