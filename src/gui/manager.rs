//! Main window implemented with egui/eframe

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info};

use super::components::notice::{Notice, NoticeKind};
use super::components::option_list::{OptionAction, OptionList};
use super::components::set_selector::{SetAction, SetSelector};
use super::constants::*;
use super::theme;
use crate::error::ChooserError;
use crate::session::{Session, SessionError};

struct ChooserApp {
    session: Session,
    set_selector: SetSelector,
    option_list: OptionList,
    notice: Option<Notice>,
}

impl ChooserApp {
    fn new(cc: &CreationContext<'_>, session: Session) -> Self {
        info!(theme = %session.theme(), "Initializing egui window");
        cc.egui_ctx.set_visuals(theme::visuals(session.theme()));

        Self {
            session,
            set_selector: SetSelector::new(),
            option_list: OptionList::new(),
            notice: None,
        }
    }

    fn handle_set_action(&mut self, action: SetAction) {
        match action {
            SetAction::None => {}
            SetAction::Select(name) => {
                self.session.select(&name);
                self.option_list.clear_selection();
            }
            SetAction::Create(name) => {
                if let Err(err) = self.session.create_set(&name) {
                    self.report(err);
                }
                self.option_list.clear_selection();
            }
            SetAction::Delete => {
                if let Err(err) = self.session.delete_selected() {
                    self.report(err);
                }
                self.option_list.clear_selection();
            }
        }
    }

    fn handle_option_action(&mut self, action: OptionAction) {
        match action {
            OptionAction::None => {}
            OptionAction::Add(text) => match self.session.add_option(&text) {
                Ok(()) => self.option_list.clear_input(),
                Err(err) => self.report(err),
            },
            OptionAction::Remove(text) => {
                if let Err(err) = self.session.remove_option(&text) {
                    self.report(err);
                }
            }
            OptionAction::Choose => {
                let result = self
                    .session
                    .choose(&mut rand::rng())
                    .map(str::to_string);
                match result {
                    Ok(picked) => {
                        self.notice = Some(Notice::new(NoticeKind::Info, "Chosen option", picked));
                    }
                    Err(err) => self.report(SessionError::Chooser(err)),
                }
            }
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        match self.session.toggle_theme() {
            Ok(theme) => ctx.set_visuals(theme::visuals(theme)),
            Err(err) => {
                // The in-memory preference still changed; apply it anyway
                ctx.set_visuals(theme::visuals(self.session.theme()));
                self.report(err);
            }
        }
    }

    fn report(&mut self, err: SessionError) {
        if let SessionError::Save(inner) = &err {
            error!(error = ?inner, "Failed to save data file");
        }
        let (kind, text) = notice_text(&err);
        self.notice = Some(Notice::new(kind, err.title(), text));
    }
}

/// Dialog severity and message for a failed session operation
fn notice_text(err: &SessionError) -> (NoticeKind, String) {
    match err {
        SessionError::Chooser(ChooserError::NoSetSelected) => (
            NoticeKind::Warning,
            "Create or select a set first.".to_string(),
        ),
        SessionError::Chooser(ChooserError::DuplicateName(name)) if name.is_empty() => (
            NoticeKind::Warning,
            "Set name must not be empty.".to_string(),
        ),
        SessionError::Chooser(inner) => (NoticeKind::Warning, capitalize(&inner.to_string())),
        SessionError::Save(inner) => (NoticeKind::Error, format!("{inner:#}")),
    }
}

impl eframe::App for ChooserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Shown before the panels so the key press that raised it can't close it
        if self.notice.as_ref().is_some_and(|notice| notice.show(ctx)) {
            self.notice = None;
        }
        let enabled = self.notice.is_none();

        let mut set_action = SetAction::None;
        let mut option_action = OptionAction::None;
        let mut toggle_theme = false;

        egui::TopBottomPanel::top("set_bar").show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.horizontal(|ui| {
                set_action = self.set_selector.ui(ui, &self.session, enabled);

                let theme_enabled = enabled && !self.set_selector.dialog_open();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = egui::Button::new(theme::toggle_label(self.session.theme()));
                    if ui.add_enabled(theme_enabled, button).clicked() {
                        toggle_theme = true;
                    }
                });
            });
            ui.add_space(PADDING);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let modal_open = self.set_selector.dialog_open();
            ui.add_enabled_ui(enabled && !modal_open, |ui| {
                option_action = self.option_list.ui(ui, self.session.selected_options());
            });
        });

        if toggle_theme {
            self.toggle_theme(ctx);
        }
        self.handle_set_action(set_action);
        self.handle_option_action(option_action);

        if self.notice.is_some() {
            ctx.request_repaint();
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn run_gui(session: Session) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Random Chooser"),
        ..Default::default()
    };

    eframe::run_native(
        "Random Chooser",
        options,
        Box::new(|cc| Ok(Box::new(ChooserApp::new(cc, session)))),
    )
    .map_err(|err| anyhow!("Failed to launch random chooser window: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("set \"a\" already exists"), "Set \"a\" already exists");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_notice_text_blank_set_name() {
        let err = SessionError::Chooser(ChooserError::DuplicateName(String::new()));
        assert_eq!(
            notice_text(&err),
            (NoticeKind::Warning, "Set name must not be empty.".to_string())
        );
    }

    #[test]
    fn test_notice_text_duplicate_set_name() {
        let err = SessionError::Chooser(ChooserError::DuplicateName("Fruits".to_string()));
        assert_eq!(
            notice_text(&err),
            (NoticeKind::Warning, "Set \"Fruits\" already exists".to_string())
        );
    }
}
