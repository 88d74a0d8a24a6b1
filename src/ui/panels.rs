//! Program panels hosted by the central display area.
//!
//! Each calculator gets its own panel struct owning its input buffers and the
//! report from its last successful calculation. Panels are swapped wholesale
//! on navigation, which is what clears their state. Rendering returns events
//! for the app to act on; a failed calculation emits a notice and leaves the
//! panel untouched.

use eframe::egui::{Button, RichText, TextEdit, Ui};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::domain::{LevelError, Sentiment, parse_price, parse_whole_level};
use crate::levels::{ResultReport, gate_ladder, midpoint_level, reversal_level, step_ladder};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::notice::Notice;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::spaced_separator;

/// The programs the user can switch between.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ProgramKind {
    #[strum(to_string = "Gate Ladder")]
    GateLadder,
    #[strum(to_string = "369 Ladder")]
    StepLadder,
    #[strum(to_string = "Reversal Lvl")]
    Reversal,
    #[strum(to_string = "Mid Lvl")]
    Midpoint,
    #[strum(to_string = "How to use")]
    HowTo,
}

impl ProgramKind {
    /// Build a fresh panel for this program, with empty inputs and no report.
    pub fn create_panel(self) -> Box<dyn ProgramPanel> {
        match self {
            ProgramKind::GateLadder => Box::new(GateLadderPanel::default()),
            ProgramKind::StepLadder => Box::new(StepLadderPanel::default()),
            ProgramKind::Reversal => Box::new(ReversalPanel::default()),
            ProgramKind::Midpoint => Box::new(MidpointPanel::default()),
            ProgramKind::HowTo => Box::new(HowToPanel),
        }
    }
}

/// What a panel asks the app to do after rendering.
#[derive(Debug, Clone)]
pub enum PanelEvent {
    Notify(Notice),
    CopyToClipboard(String),
}

/// A program panel hosted in the central display area.
pub trait ProgramPanel {
    fn kind(&self) -> ProgramKind;
    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent>;

    /// The last successful calculation, if any. Save-to-file reads this.
    fn last_report(&self) -> Option<&ResultReport> {
        None
    }
}

fn invalid_input_event(err: LevelError) -> PanelEvent {
    PanelEvent::Notify(Notice::error(UI_TEXT.invalid_input_title, err.to_string()))
}

/// Prompt + single-line entry, shared by every calculator panel.
fn price_entry(ui: &mut Ui, prompt: &str, buffer: &mut String) {
    ui.label_subdued(prompt);
    ui.add(TextEdit::singleline(buffer).desired_width(180.0));
    ui.add_space(6.0);
}

/// Bullish / Bearish button row; returns the clicked sentiment.
fn sentiment_buttons(ui: &mut Ui) -> Option<Sentiment> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        if ui.button(UI_TEXT.bullish_button).clicked() {
            clicked = Some(Sentiment::Bullish);
        }
        if ui.button(UI_TEXT.bearish_button).clicked() {
            clicked = Some(Sentiment::Bearish);
        }
    });
    clicked
}

/// Render the last report (or the waiting placeholder).
fn report_display(ui: &mut Ui, report: Option<&ResultReport>) {
    ui.add_space(6.0);
    match report {
        Some(report) => ui.label_result(report.display()),
        None => ui.label_subdued(UI_TEXT.waiting_placeholder),
    }
    ui.add_space(6.0);
}

/// Copy button, enabled only once a report exists.
fn copy_button(ui: &mut Ui, label: &str, report: Option<&ResultReport>) -> Option<PanelEvent> {
    let enabled = report.is_some();
    if ui.add_enabled(enabled, Button::new(label)).clicked() {
        return report.map(|r| PanelEvent::CopyToClipboard(r.clipboard().to_owned()));
    }
    None
}

// ---------------------------------------------------------------------------
// Gate ladder
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct GateLadderPanel {
    input: String,
    last: Option<ResultReport>,
}

impl GateLadderPanel {
    /// Parse the buffer and project the ladder. On error the previous report
    /// is left in place.
    fn run_calculation(&mut self, sentiment: Sentiment) -> Result<(), LevelError> {
        let level = parse_whole_level(&self.input)?;
        let rungs = gate_ladder(level, sentiment)?;
        self.last = Some(ResultReport::gate_ladder(sentiment, &rungs));
        Ok(())
    }
}

impl ProgramPanel for GateLadderPanel {
    fn kind(&self) -> ProgramKind {
        ProgramKind::GateLadder
    }

    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        ui.label_header(ProgramKind::GateLadder.to_string());
        ui.add_space(10.0);
        price_entry(ui, UI_TEXT.price_prompt, &mut self.input);

        if let Some(sentiment) = sentiment_buttons(ui) {
            if let Err(err) = self.run_calculation(sentiment) {
                events.push(invalid_input_event(err));
            }
        }

        report_display(ui, self.last.as_ref());
        if let Some(event) = copy_button(ui, UI_TEXT.copy_results_button, self.last.as_ref()) {
            events.push(event);
        }
        events
    }

    fn last_report(&self) -> Option<&ResultReport> {
        self.last.as_ref()
    }
}

// ---------------------------------------------------------------------------
// 369 step ladder
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct StepLadderPanel {
    input: String,
    last: Option<ResultReport>,
}

impl StepLadderPanel {
    fn run_calculation(&mut self, sentiment: Sentiment) -> Result<(), LevelError> {
        let level = parse_whole_level(&self.input)?;
        let rungs = step_ladder(level, sentiment)?;
        self.last = Some(ResultReport::step_ladder(&rungs));
        Ok(())
    }
}

impl ProgramPanel for StepLadderPanel {
    fn kind(&self) -> ProgramKind {
        ProgramKind::StepLadder
    }

    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        ui.label_header(ProgramKind::StepLadder.to_string());
        ui.add_space(10.0);
        price_entry(ui, UI_TEXT.price_prompt, &mut self.input);

        if let Some(sentiment) = sentiment_buttons(ui) {
            if let Err(err) = self.run_calculation(sentiment) {
                events.push(invalid_input_event(err));
            }
        }

        report_display(ui, self.last.as_ref());
        if let Some(event) = copy_button(ui, UI_TEXT.copy_results_button, self.last.as_ref()) {
            events.push(event);
        }
        events
    }

    fn last_report(&self) -> Option<&ResultReport> {
        self.last.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Reversal level
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ReversalPanel {
    input: String,
    last: Option<ResultReport>,
}

impl ReversalPanel {
    fn run_calculation(&mut self, sentiment: Sentiment) -> Result<(), LevelError> {
        let price = parse_price(&self.input)?;
        let level = reversal_level(price, sentiment)?;
        self.last = Some(ResultReport::reversal(sentiment, level));
        Ok(())
    }
}

impl ProgramPanel for ReversalPanel {
    fn kind(&self) -> ProgramKind {
        ProgramKind::Reversal
    }

    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        // The original dressed this panel with a big dollar glyph
        ui.label(
            RichText::new("$")
                .size(48.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_header(ProgramKind::Reversal.to_string());
        ui.add_space(10.0);
        price_entry(ui, UI_TEXT.price_prompt, &mut self.input);

        if let Some(sentiment) = sentiment_buttons(ui) {
            if let Err(err) = self.run_calculation(sentiment) {
                events.push(invalid_input_event(err));
            }
        }

        report_display(ui, self.last.as_ref());
        if let Some(event) = copy_button(ui, UI_TEXT.copy_results_button, self.last.as_ref()) {
            events.push(event);
        }
        events
    }

    fn last_report(&self) -> Option<&ResultReport> {
        self.last.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Geometric midpoint
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MidpointPanel {
    high_input: String,
    low_input: String,
    last: Option<ResultReport>,
}

impl MidpointPanel {
    fn run_calculation(&mut self) -> Result<(), LevelError> {
        let high = parse_price(&self.high_input)?;
        let low = parse_price(&self.low_input)?;
        let level = midpoint_level(high, low)?;
        self.last = Some(ResultReport::midpoint(level));
        Ok(())
    }
}

impl ProgramPanel for MidpointPanel {
    fn kind(&self) -> ProgramKind {
        ProgramKind::Midpoint
    }

    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        ui.label_header(ProgramKind::Midpoint.to_string());
        ui.add_space(10.0);
        price_entry(ui, UI_TEXT.high_prompt, &mut self.high_input);
        price_entry(ui, UI_TEXT.low_prompt, &mut self.low_input);

        if ui.button(UI_TEXT.calculate_button).clicked() {
            if let Err(err) = self.run_calculation() {
                events.push(invalid_input_event(err));
            }
        }

        report_display(ui, self.last.as_ref());
        // Midpoint copies just the value, not the "Result:" line
        if let Some(event) = copy_button(ui, UI_TEXT.copy_value_button, self.last.as_ref()) {
            events.push(event);
        }
        events
    }

    fn last_report(&self) -> Option<&ResultReport> {
        self.last.as_ref()
    }
}

// ---------------------------------------------------------------------------
// How-to page
// ---------------------------------------------------------------------------

pub struct HowToPanel;

impl ProgramPanel for HowToPanel {
    fn kind(&self) -> ProgramKind {
        ProgramKind::HowTo
    }

    fn render(&mut self, ui: &mut Ui) -> Vec<PanelEvent> {
        ui.label_header(UI_TEXT.how_to_heading);
        spaced_separator(ui);
        ui.label_result(UI_TEXT.how_to_body);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_ladder_panel_records_a_report() {
        let mut panel = GateLadderPanel {
            input: "1050".to_string(),
            last: None,
        };
        panel.run_calculation(Sentiment::Bullish).unwrap();

        let report = panel.last_report().unwrap();
        assert!(report.display().starts_with("Bullish Levels:\nLevel 1: 1068\n"));
        assert!(report.display().contains("Level 10: 1230\n"));
    }

    #[test]
    fn failed_calculation_leaves_previous_report_untouched() {
        let mut panel = GateLadderPanel {
            input: "1050".to_string(),
            last: None,
        };
        panel.run_calculation(Sentiment::Bullish).unwrap();
        let before = panel.last_report().cloned();

        panel.input = "not a number".to_string();
        assert_eq!(
            panel.run_calculation(Sentiment::Bearish),
            Err(LevelError::NotANumber)
        );
        assert_eq!(panel.last_report().cloned(), before);
    }

    #[test]
    fn step_ladder_panel_matches_worked_example() {
        let mut panel = StepLadderPanel {
            input: " 1050 ".to_string(),
            last: None,
        };
        panel.run_calculation(Sentiment::Bullish).unwrap();
        assert_eq!(
            panel.last_report().unwrap().display(),
            "Level 3: 1053\nLevel 6: 1059\nLevel 9: 1068"
        );
    }

    #[test]
    fn reversal_panel_rejects_negative_prices() {
        let mut panel = ReversalPanel {
            input: "-100".to_string(),
            last: None,
        };
        assert_eq!(
            panel.run_calculation(Sentiment::Bullish),
            Err(LevelError::NegativePrice)
        );
        assert!(panel.last_report().is_none());
    }

    #[test]
    fn midpoint_panel_copies_the_bare_value() {
        let mut panel = MidpointPanel {
            high_input: "100".to_string(),
            low_input: "25".to_string(),
            last: None,
        };
        panel.run_calculation().unwrap();

        let report = panel.last_report().unwrap();
        assert_eq!(report.display(), "Result: 50.00");
        assert_eq!(report.clipboard(), "50.00");
    }

    #[test]
    fn fresh_panels_start_without_a_report() {
        for kind in [
            ProgramKind::GateLadder,
            ProgramKind::StepLadder,
            ProgramKind::Reversal,
            ProgramKind::Midpoint,
            ProgramKind::HowTo,
        ] {
            let panel = kind.create_panel();
            assert_eq!(panel.kind(), kind);
            assert!(panel.last_report().is_none());
        }
    }
}
