use eframe::egui::{self, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use crate::state::AppState;
use crate::ui::{game_log, no_data_warning, panels, pie, plot};

const LINE_CHART_HEIGHT: f32 = 420.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NbaDashboardApp {
    pub state: AppState,
}

impl NbaDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for NbaDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + data source ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: line chart (2/3) | distribution + metrics (1/3) ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &self.state;
            StripBuilder::new(ui)
                .size(Size::relative(2.0 / 3.0))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| {
                        egui::ScrollArea::vertical()
                            .id_salt("history_column")
                            .show(ui, |ui| history_column(ui, state));
                    });
                    strip.cell(|ui| summary_column(ui, state));
                });
        });
    }
}

fn history_column(ui: &mut Ui, state: &AppState) {
    plot::cumulative_plot(ui, state, LINE_CHART_HEIGHT);

    if state.show_game_log && !state.visible.is_empty() {
        ui.add_space(8.0);
        ui.strong("Game log");
        game_log::game_log(ui, state);
    }
}

fn summary_column(ui: &mut Ui, state: &AppState) {
    ui.heading("Result Distribution");

    let agg = &state.aggregate;
    if agg.is_empty() {
        no_data_warning(ui);
        return;
    }

    pie::result_pie(ui, agg);

    ui.add_space(8.0);
    metric(ui, "Total Games", &agg.total_games.to_string());
    if let Some(pct) = agg.win_percentage_label() {
        metric(ui, "Win Percentage", &pct);
    }
}

/// Label-over-value display for a single summary number.
fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value).size(32.0));
    ui.add_space(6.0);
}
