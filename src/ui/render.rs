use eframe::egui::{
    Align, CentralPanel, Context, Frame, Id, Key, Layout, Margin, Modal, SidePanel, TopBottomPanel,
    ViewportCommand,
};
use strum::IntoEnumIterator;

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::notice::NoticeKind;
use crate::ui::panels::ProgramKind;
use crate::ui::styles::UiStyleExt;

use super::app::GannLevelsApp;

impl GannLevelsApp {
    pub(super) fn render_nav_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("program_panel")
            .min_width(150.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.label_header(UI_TEXT.programs_heading);
                ui.add_space(10.0);

                let mut clicked = None;
                for kind in ProgramKind::iter().filter(|kind| *kind != ProgramKind::HowTo) {
                    let selected = self.active_kind() == Some(kind);
                    if ui.selectable_label(selected, kind.to_string()).clicked() {
                        clicked = Some(kind);
                    }
                    ui.add_space(4.0);
                }

                // The how-to page lives at the bottom, away from the calculators
                ui.with_layout(Layout::bottom_up(Align::LEFT), |ui| {
                    ui.add_space(10.0);
                    let selected = self.active_kind() == Some(ProgramKind::HowTo);
                    if ui.selectable_label(selected, UI_TEXT.how_to_button).clicked() {
                        clicked = Some(ProgramKind::HowTo);
                    }
                });

                if let Some(kind) = clicked {
                    self.switch_program(kind);
                }
            });
    }

    pub(super) fn render_control_panel(&mut self, ctx: &Context) {
        let control_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        TopBottomPanel::bottom("control_panel")
            .frame(control_frame)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(UI_TEXT.exit_button).clicked() {
                        self.confirm_exit = true;
                    }
                    if ui.button(UI_TEXT.save_button).clicked() {
                        self.save_action();
                    }
                    if ui.button(UI_TEXT.clear_button).clicked() {
                        self.clear_action();
                    }
                });
                ui.add_space(6.0);
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        let events = CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| {
                if self.show_starfield {
                    self.starfield.paint(ui.painter(), ui.max_rect());
                }

                let mut events = Vec::new();
                if let Some(panel) = self.active_panel.as_mut() {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.display_max_width);
                        Frame::group(ui.style())
                            .fill(UI_CONFIG.colors.display_frame)
                            .inner_margin(Margin::same(24))
                            .show(ui, |ui| {
                                ui.set_min_width(UI_CONFIG.display_max_width - 60.0);
                                events = panel.render(ui);
                            });
                    });
                }
                events
            })
            .inner;

        self.handle_panel_events(events);
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // Modals own the keyboard while they are open
        if self.notice.is_some() || self.confirm_exit {
            return;
        }
        // Don't steal digits from a focused text entry
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            // Use 1/2/3/4 keys to switch programs
            if i.key_pressed(Key::Num1) {
                self.switch_program(ProgramKind::GateLadder);
            }
            if i.key_pressed(Key::Num2) {
                self.switch_program(ProgramKind::StepLadder);
            }
            if i.key_pressed(Key::Num3) {
                self.switch_program(ProgramKind::Reversal);
            }
            if i.key_pressed(Key::Num4) {
                self.switch_program(ProgramKind::Midpoint);
            }

            if i.key_pressed(Key::H) {
                self.switch_program(ProgramKind::HowTo);
            }

            if i.key_pressed(Key::Escape) && self.active_panel.is_some() {
                self.clear_action();
            }
        });
    }

    pub(super) fn render_notice_modal(&mut self, ctx: &Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };

        let mut dismissed = false;
        let modal = Modal::new(Id::new("notice_modal")).show(ctx, |ui| {
            ui.set_max_width(380.0);
            match notice.kind {
                NoticeKind::Info => ui.label_header(&notice.title),
                NoticeKind::Error => ui.label_error(&notice.title),
            }
            ui.add_space(8.0);
            ui.label(&notice.body);
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                if ui.button(UI_TEXT.ok_button).clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || modal.should_close() {
            self.notice = None;
        }
    }

    pub(super) fn render_exit_modal(&mut self, ctx: &Context) {
        if !self.confirm_exit {
            return;
        }

        let mut confirmed = false;
        let mut cancelled = false;
        let modal = Modal::new(Id::new("exit_modal")).show(ctx, |ui| {
            ui.label_header(UI_TEXT.exit_title);
            ui.add_space(8.0);
            ui.label(UI_TEXT.exit_question);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button(UI_TEXT.yes_button).clicked() {
                    confirmed = true;
                }
                if ui.button(UI_TEXT.no_button).clicked() {
                    cancelled = true;
                }
            });
        });

        if confirmed {
            self.confirm_exit = false;
            ctx.send_viewport_cmd(ViewportCommand::Close);
        } else if cancelled || modal.should_close() {
            self.confirm_exit = false;
        }
    }
}
