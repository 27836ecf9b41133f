//! Informational modal shown for results, empty states and errors

use eframe::egui;

use crate::gui::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    fn color(self) -> egui::Color32 {
        match self {
            NoticeKind::Info => NOTICE_INFO,
            NoticeKind::Warning => NOTICE_WARNING,
            NoticeKind::Error => NOTICE_ERROR,
        }
    }
}

pub struct Notice {
    pub title: String,
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            kind,
        }
    }

    /// Render the dialog. Returns true once the user dismisses it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;

        egui::Window::new(self.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match self.kind {
                    NoticeKind::Info => {
                        ui.label(egui::RichText::new(self.text.as_str()).heading().color(self.kind.color()));
                    }
                    NoticeKind::Warning | NoticeKind::Error => {
                        ui.colored_label(self.kind.color(), self.text.as_str());
                    }
                }

                ui.add_space(ITEM_SPACING);

                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    dismissed = true;
                }
            });

        dismissed
    }
}
