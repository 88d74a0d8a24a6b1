#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod export;
pub mod levels;
pub mod ui;

// Re-export commonly used types
pub use domain::{LevelError, Sentiment, parse_price, parse_whole_level};
pub use levels::{ResultReport, gate_ladder, midpoint_level, reversal_level, step_ladder};
pub use ui::GannLevelsApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip the decorative starfield background
    #[arg(long, default_value_t = false)]
    pub no_stars: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: Cli) -> Box<dyn eframe::App> {
    let app = ui::GannLevelsApp::new(cc, &cli);
    Box::new(app)
}
