use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{LOSS_COLOR, WIN_COLOR};
use crate::data::model::GameResult;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Table of the games behind the chart, one row per game in date order.
pub fn game_log(ui: &mut Ui, state: &AppState) {
    let games = &state.visible;
    let agg = &state.aggregate;

    TableBuilder::new(ui)
        .id_salt("game_log")
        .striped(true)
        .resizable(false)
        .max_scroll_height(260.0)
        .column(Column::exact(40.0))
        .column(Column::exact(100.0))
        .column(Column::exact(60.0))
        .column(Column::exact(120.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in ["#", "Date", "Result", "Type", "Record"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, games.len(), |mut row| {
                let i = row.index();
                let game = games[i];
                row.col(|ui| {
                    ui.label((i + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(game.date.format("%Y-%m-%d").to_string());
                });
                row.col(|ui| {
                    let color = match game.result {
                        GameResult::Win => WIN_COLOR,
                        GameResult::Loss => LOSS_COLOR,
                    };
                    ui.label(RichText::new(game.result.to_string()).color(color).strong());
                });
                row.col(|ui| {
                    ui.label(game.game_type_label());
                });
                row.col(|ui| {
                    ui.label(format!(
                        "{}-{}",
                        agg.cumulative_wins[i], agg.cumulative_losses[i]
                    ));
                });
            });
        });
}
