mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::NbaDashboardApp;
use clap::Parser;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = DashboardConfig::parse();

    let table = match data::loader::load(&config.data) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.data.display());
            return Err(e).with_context(|| format!("loading {}", config.data.display()));
        }
    };
    log::info!(
        "Loaded {} games from {} ({} seasons, {:?}..={:?})",
        table.len(),
        config.data.display(),
        table.years.len(),
        table.years.first(),
        table.years.last()
    );

    let state = AppState::new(table, config.data.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NBA Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(NbaDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
