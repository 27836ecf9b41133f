use eframe::egui;

use crate::gui::constants::*;
use crate::session::Session;

/// Set dropdown plus the create/delete buttons and their dialogs
pub struct SetSelector {
    new_set_name: String,
    show_new_dialog: bool,
    show_delete_confirm: bool,
}

impl SetSelector {
    pub fn new() -> Self {
        Self {
            new_set_name: String::new(),
            show_new_dialog: false,
            show_delete_confirm: false,
        }
    }

    /// Render the selector row. While `enabled` is false (another modal is
    /// up) the pending dialogs stay hidden so none of their buttons can fire.
    pub fn ui(&mut self, ui: &mut egui::Ui, session: &Session, enabled: bool) -> SetAction {
        let mut action = SetAction::None;
        let controls_enabled = enabled && !self.dialog_open();

        ui.add_enabled_ui(controls_enabled, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Set:").strong());

                let mut current = session.selected().unwrap_or_default().to_string();
                let selected_text = session.selected().unwrap_or("(no sets)");
                egui::ComboBox::from_id_salt("set_selector")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for name in session.store().set_names() {
                            if ui
                                .selectable_value(&mut current, name.to_string(), name)
                                .clicked()
                            {
                                action = SetAction::Select(name.to_string());
                            }
                        }
                    });

                if ui.button("\u{2795} New set").clicked() {
                    self.open_new_dialog();
                }

                if ui
                    .add_enabled(session.selected().is_some(), egui::Button::new("\u{1F5D1} Delete set"))
                    .clicked()
                {
                    self.open_delete_confirm(session.selected().is_some());
                }
            });
        });

        if !enabled {
            return action;
        }

        // Modal dialogs
        if self.show_new_dialog {
            if let Some(dialog_action) = self.new_set_dialog(ui.ctx()) {
                action = dialog_action;
            }
        }

        if self.show_delete_confirm {
            if let Some(dialog_action) = self.delete_confirm_dialog(ui.ctx(), session) {
                action = dialog_action;
            }
        }

        action
    }

    /// Open the name dialog unless another dialog is already showing
    pub fn open_new_dialog(&mut self) {
        if self.dialog_open() {
            return;
        }
        self.show_new_dialog = true;
        self.new_set_name.clear();
    }

    /// Ask for delete confirmation unless another dialog is already showing
    pub fn open_delete_confirm(&mut self, has_selection: bool) {
        if self.dialog_open() || !has_selection {
            return;
        }
        self.show_delete_confirm = true;
    }

    pub fn dialog_open(&self) -> bool {
        self.show_new_dialog || self.show_delete_confirm
    }

    fn new_set_dialog(&mut self, ctx: &egui::Context) -> Option<SetAction> {
        let mut action = None;

        egui::Window::new("New Set")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Name of the new set:");
                let response = ui.text_edit_singleline(&mut self.new_set_name);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Create").clicked() || submitted {
                        action = Some(SetAction::Create(self.new_set_name.clone()));
                        self.show_new_dialog = false;
                    }

                    if ui.button("Cancel").clicked() {
                        self.show_new_dialog = false;
                    }
                });
            });

        action
    }

    fn delete_confirm_dialog(&mut self, ctx: &egui::Context, session: &Session) -> Option<SetAction> {
        let Some(name) = session.selected() else {
            self.show_delete_confirm = false;
            return None;
        };
        let mut action = None;

        egui::Window::new("Delete Set")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete the set '{name}'?"));
                ui.colored_label(NOTICE_ERROR, "Its options will be lost.");

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        action = Some(SetAction::Delete);
                        self.show_delete_confirm = false;
                    }

                    if ui.button("Cancel").clicked() {
                        self.show_delete_confirm = false;
                    }
                });
            });

        action
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SetAction {
    None,
    Select(String),
    Create(String),
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::DataFile;
    use tempfile::TempDir;

    fn session_with_fruits(dir: &TempDir) -> Session {
        let path = dir.path().join("sets.json");
        std::fs::write(&path, r#"{"Fruits": ["Apple"]}"#).unwrap();
        Session::open(DataFile::new(path)).unwrap()
    }

    fn render(selector: &mut SetSelector, session: &Session, enabled: bool) -> SetAction {
        let ctx = egui::Context::default();
        let mut action = SetAction::None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                action = selector.ui(ui, session, enabled);
            });
        });
        action
    }

    #[test]
    fn test_new_dialog_blocked_while_delete_confirm_open() {
        let mut selector = SetSelector::new();
        selector.open_delete_confirm(true);
        selector.open_new_dialog();
        assert!(selector.show_delete_confirm);
        assert!(!selector.show_new_dialog);
    }

    #[test]
    fn test_delete_confirm_blocked_while_new_dialog_open() {
        let mut selector = SetSelector::new();
        selector.open_new_dialog();
        selector.open_delete_confirm(true);
        assert!(selector.show_new_dialog);
        assert!(!selector.show_delete_confirm);
    }

    #[test]
    fn test_delete_confirm_needs_selection() {
        let mut selector = SetSelector::new();
        selector.open_delete_confirm(false);
        assert!(!selector.dialog_open());
    }

    #[test]
    fn test_disabled_render_keeps_dialogs_pending() {
        let dir = TempDir::new().unwrap();
        let session = session_with_fruits(&dir);
        let mut selector = SetSelector::new();
        selector.open_delete_confirm(true);

        assert_eq!(render(&mut selector, &session, false), SetAction::None);
        assert!(selector.show_delete_confirm);

        assert_eq!(render(&mut selector, &session, true), SetAction::None);
        assert!(selector.show_delete_confirm);
    }
}
