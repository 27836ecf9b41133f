//! Mapping from the stored theme preference to egui style presets

use eframe::egui;

use crate::theme::Theme;

pub fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    }
}

/// Label for the toggle button: names the theme it switches to
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\u{1F319} Dark",
        Theme::Dark => "\u{2600} Light",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_follow_theme() {
        assert!(!visuals(Theme::Light).dark_mode);
        assert!(visuals(Theme::Dark).dark_mode);
    }
}
