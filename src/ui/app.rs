use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::Cli;
use crate::export;
use crate::ui::config::UI_TEXT;
use crate::ui::notice::Notice;
use crate::ui::panels::{PanelEvent, ProgramKind, ProgramPanel};
use crate::ui::starfield::Starfield;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Deserialize, Serialize)]
pub struct GannLevelsApp {
    // UI preferences (persisted)
    #[serde(default = "default_show_starfield")]
    pub(super) show_starfield: bool,
    #[serde(default)]
    pub(super) last_program: Option<ProgramKind>,

    // Runtime state - skipped because reports and inputs are transient
    #[serde(skip)]
    pub(super) active_panel: Option<Box<dyn ProgramPanel>>,
    #[serde(skip)]
    pub(super) notice: Option<Notice>,
    #[serde(skip)]
    pub(super) confirm_exit: bool,
    #[serde(skip)]
    pub(super) starfield: Starfield,
}

/// Default for the starfield toggle - used by serde and initialization
fn default_show_starfield() -> bool {
    true
}

impl GannLevelsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, cli: &Cli) -> Self {
        let mut app: GannLevelsApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Failed to get Gann Levels state from storage. Creating anew.");
                }
                app = GannLevelsApp::new_with_initial_state();
            }
        } else {
            app = GannLevelsApp::new_with_initial_state();
        }

        if cli.no_stars {
            app.show_starfield = false;
        }

        // Re-open the last shown program with a fresh panel; inputs and
        // reports are never persisted
        app.active_panel = app.last_program.map(ProgramKind::create_panel);

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            show_starfield: default_show_starfield(),
            last_program: None,
            active_panel: None,
            notice: None,
            confirm_exit: false,
            starfield: Starfield::default(),
        }
    }

    pub(super) fn active_kind(&self) -> Option<ProgramKind> {
        self.active_panel.as_ref().map(|panel| panel.kind())
    }

    /// Replace the display wholesale with a fresh panel for `kind`.
    ///
    /// The previous panel's inputs and report drop here; this is the only
    /// way panel state is cleared besides the clear action.
    pub(super) fn switch_program(&mut self, kind: ProgramKind) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Switching to program: {}", kind);
        }

        self.active_panel = Some(kind.create_panel());
        self.last_program = Some(kind);
    }

    pub(super) fn clear_action(&mut self) {
        self.active_panel = None;
        self.last_program = None;
        self.notice = Some(Notice::info(UI_TEXT.clear_title, UI_TEXT.clear_body));
    }

    pub(super) fn save_action(&mut self) {
        let Some(contents) = self
            .active_panel
            .as_ref()
            .and_then(|panel| panel.last_report())
            .map(|report| report.display().to_owned())
        else {
            self.notice = Some(Notice::error(
                UI_TEXT.save_error_title,
                UI_TEXT.save_no_results,
            ));
            return;
        };

        // Cancelling the dialog is not an error
        let Some(path) = export::prompt_save_path() else {
            return;
        };

        match export::write_report(&path, &contents) {
            Ok(()) => {
                self.notice = Some(Notice::info(
                    UI_TEXT.save_success_title,
                    format!("{}{}", UI_TEXT.save_success_prefix, path.display()),
                ));
            }
            Err(err) => {
                log::error!("Failed to save results: {:#}", err);
                self.notice = Some(Notice::error(UI_TEXT.save_error_title, format!("{:#}", err)));
            }
        }
    }

    pub(super) fn copy_action(&mut self, text: &str) {
        match export::copy_to_clipboard(text) {
            Ok(()) => {
                // Single values get echoed back in the notice, multi-line
                // reports just get a confirmation
                let body = if text.contains('\n') {
                    UI_TEXT.copied_body.to_string()
                } else {
                    format!("{}{}", UI_TEXT.copied_value_prefix, text)
                };
                self.notice = Some(Notice::info(UI_TEXT.copied_title, body));
            }
            Err(err) => {
                log::error!("Failed to copy results: {:#}", err);
                self.notice = Some(Notice::error(UI_TEXT.copy_error_title, format!("{:#}", err)));
            }
        }
    }

    pub(super) fn handle_panel_events(&mut self, events: Vec<PanelEvent>) {
        for event in events {
            match event {
                PanelEvent::Notify(notice) => self.notice = Some(notice),
                PanelEvent::CopyToClipboard(text) => self.copy_action(&text),
            }
        }
    }
}

impl eframe::App for GannLevelsApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_nav_panel(ctx);
        self.render_control_panel(ctx);
        self.render_central_panel(ctx);

        self.render_notice_modal(ctx);
        self.render_exit_modal(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notice::NoticeKind;

    #[test]
    fn initial_state_shows_no_program() {
        let app = GannLevelsApp::new_with_initial_state();
        assert!(app.active_kind().is_none());
        assert!(app.notice.is_none());
        assert!(app.show_starfield);
    }

    #[test]
    fn switching_replaces_the_panel_wholesale() {
        let mut app = GannLevelsApp::new_with_initial_state();

        app.switch_program(ProgramKind::GateLadder);
        assert_eq!(app.active_kind(), Some(ProgramKind::GateLadder));
        assert_eq!(app.last_program, Some(ProgramKind::GateLadder));

        app.switch_program(ProgramKind::Midpoint);
        assert_eq!(app.active_kind(), Some(ProgramKind::Midpoint));
        // A fresh panel never carries a report over
        assert!(
            app.active_panel
                .as_ref()
                .and_then(|panel| panel.last_report())
                .is_none()
        );
    }

    #[test]
    fn clear_hides_the_panel_and_confirms() {
        let mut app = GannLevelsApp::new_with_initial_state();
        app.switch_program(ProgramKind::Reversal);

        app.clear_action();
        assert!(app.active_kind().is_none());
        assert!(app.last_program.is_none());

        let notice = app.notice.expect("clear should confirm via notice");
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.title, UI_TEXT.clear_title);
    }

    #[test]
    fn save_without_a_calculation_is_rejected() {
        let mut app = GannLevelsApp::new_with_initial_state();

        // No panel at all
        app.save_action();
        let notice = app.notice.take().expect("save should be rejected");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.body, UI_TEXT.save_no_results);

        // Panel shown but nothing calculated yet
        app.switch_program(ProgramKind::GateLadder);
        app.save_action();
        let notice = app.notice.take().expect("save should be rejected");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn panel_notify_events_replace_the_notice() {
        let mut app = GannLevelsApp::new_with_initial_state();
        app.handle_panel_events(vec![PanelEvent::Notify(Notice::error("A", "first"))]);
        app.handle_panel_events(vec![PanelEvent::Notify(Notice::error("B", "second"))]);

        let notice = app.notice.expect("notice should be set");
        assert_eq!(notice.title, "B");
    }
}
