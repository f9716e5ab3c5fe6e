use eframe::egui::{self, RichText, Ui};

use crate::data::model::GameType;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(criteria) = state.criteria.clone() else {
        ui.label("No games loaded.");
        return;
    };
    let table = state.table;

    // ---- Season ----
    ui.strong("Season");
    egui::ComboBox::from_id_salt("year")
        .selected_text(criteria.year.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for &year in &table.years {
                if ui
                    .selectable_label(criteria.year == year, year.to_string())
                    .clicked()
                {
                    state.set_year(year);
                }
            }
        });
    ui.add_space(6.0);

    // ---- Team (scoped to the selected season) ----
    let team = state
        .criteria
        .as_ref()
        .map(|c| c.team.clone())
        .unwrap_or_default();
    let year = state.criteria.as_ref().map_or(criteria.year, |c| c.year);
    ui.strong("Team");
    egui::ComboBox::from_id_salt("team")
        .selected_text(&team)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for candidate in table.teams_in_year(year) {
                if ui.selectable_label(team == *candidate, candidate).clicked() {
                    state.set_team(candidate);
                }
            }
        });
    ui.add_space(6.0);

    // ---- Game type pills ----
    ui.strong("Game type");
    let current = state
        .criteria
        .as_ref()
        .map_or(criteria.game_type, |c| c.game_type);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for game_type in GameType::ALL {
            if ui
                .selectable_label(current == game_type, game_type.label())
                .clicked()
            {
                state.set_game_type(game_type);
            }
        }
    });

    ui.separator();
    ui.checkbox(&mut state.show_game_log, "Show game log");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the data source and row counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("NBA Dashboard - Season Analysis");
        ui.separator();
        ui.label(RichText::new(state.source.display().to_string()).monospace());
        ui.separator();
        ui.label(format!(
            "{} games loaded, {} shown",
            state.table.len(),
            state.visible.len()
        ));
    });
}
