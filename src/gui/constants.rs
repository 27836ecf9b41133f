//! GUI-specific constants for layout and dialog colors

use egui;

/// Main window dimensions
pub const WINDOW_WIDTH: f32 = 600.0;
pub const WINDOW_HEIGHT: f32 = 400.0;
pub const WINDOW_MIN_WIDTH: f32 = 420.0;
pub const WINDOW_MIN_HEIGHT: f32 = 300.0;

/// Layout spacing
pub const PADDING: f32 = 10.0;
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Width of the button column next to the option list
pub const SIDE_PANEL_WIDTH: f32 = 180.0;

/// Dialog accent colors
pub const NOTICE_INFO: egui::Color32 = egui::Color32::from_rgb(0, 150, 200);
pub const NOTICE_WARNING: egui::Color32 = egui::Color32::from_rgb(200, 150, 0);
pub const NOTICE_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
