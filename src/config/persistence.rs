//! File persistence configuration

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".levels_state.json";

/// Default filename offered by the save dialog
pub const SAVE_DEFAULT_FILENAME: &str = "gann_results.txt";

/// Default extension for saved result files
pub const SAVE_EXTENSION: &str = "txt";

/// Label shown for the save dialog's file-type filter
pub const SAVE_FILTER_NAME: &str = "Text files";
