use eframe::egui::{RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::{LOSS_COLOR, WIN_COLOR};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Cumulative wins / losses line chart
// ---------------------------------------------------------------------------

/// Render the cumulative win/loss chart for the current selection.
pub fn cumulative_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(criteria) = &state.criteria else {
        super::no_data_warning(ui);
        return;
    };

    ui.heading(format!(
        "Cumulative Wins and Losses - {} ({})",
        criteria.team, criteria.year
    ));

    if state.aggregate.is_empty() {
        super::no_data_warning(ui);
        return;
    }

    ui.label(RichText::new(format!("Season {} - {}", criteria.year, criteria.game_type)).strong());

    let agg = &state.aggregate;
    let series = [
        ("Wins", agg.win_series(), WIN_COLOR),
        ("Losses", agg.loss_series(), LOSS_COLOR),
    ];

    Plot::new("cumulative_plot")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Game number")
        .y_axis_label("Cumulative games")
        .include_x(0.0)
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (name, values, color) in series {
                let line_points: PlotPoints = values.iter().copied().collect();
                let markers: PlotPoints = values.into_iter().collect();

                plot_ui.line(Line::new(line_points).name(name).color(color).width(2.0));
                plot_ui.points(Points::new(markers).name(name).color(color).radius(2.5));
            }
        });
}
