//! Desktop window built on egui/eframe

mod components;
mod constants;
mod manager;
mod theme;

pub use manager::run_gui;
