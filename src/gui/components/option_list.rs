//! Option list of the active set with the entry field and action buttons

use eframe::egui;

use crate::gui::constants::*;

pub struct OptionList {
    new_option: String,
    /// Highlighted row in the list view
    selected_idx: Option<usize>,
}

impl OptionList {
    pub fn new() -> Self {
        Self {
            new_option: String::new(),
            selected_idx: None,
        }
    }

    /// Clear the entry field after an option was added
    pub fn clear_input(&mut self) {
        self.new_option.clear();
    }

    /// Drop the row highlight, e.g. after switching sets
    pub fn clear_selection(&mut self) {
        self.selected_idx = None;
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, options: &[String]) -> OptionAction {
        let mut action = OptionAction::None;

        if self.selected_idx.is_some_and(|idx| idx >= options.len()) {
            self.selected_idx = None;
        }

        egui::SidePanel::right("option_actions")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .show_inside(ui, |ui| {
                ui.label("Option:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.new_option).hint_text("New option"),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(ITEM_SPACING);

                ui.vertical_centered_justified(|ui| {
                    if ui.button("\u{2795} Add option").clicked() || submitted {
                        action = OptionAction::Add(self.new_option.clone());
                    }

                    if ui
                        .add_enabled(self.selected_idx.is_some(), egui::Button::new("\u{2796} Remove selected"))
                        .clicked()
                    {
                        if let Some(text) = self.selected_idx.and_then(|idx| options.get(idx)) {
                            action = OptionAction::Remove(text.clone());
                            self.selected_idx = None;
                        }
                    }

                    ui.add_space(SECTION_SPACING);

                    if ui.button("\u{1F3B2} Choose random").clicked() {
                        action = OptionAction::Choose;
                    }
                });
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (idx, option) in options.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_idx, Some(idx), option.as_str());
                    }

                    if options.is_empty() {
                        ui.label(egui::RichText::new("(No options yet)").italics().weak());
                    }
                });
        });

        action
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionAction {
    None,
    Add(String),
    Remove(String),
    Choose,
}
