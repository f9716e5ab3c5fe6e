pub mod game_log;
pub mod panels;
pub mod pie;
pub mod plot;

use eframe::egui::{Color32, RichText, Ui};

/// Message shown wherever a chart would be empty.
pub const NO_DATA: &str = "No data available for the current selection.";

pub fn no_data_warning(ui: &mut Ui) {
    ui.label(RichText::new(format!("⚠ {NO_DATA}")).color(Color32::from_rgb(0xd4, 0xa0, 0x17)));
}
