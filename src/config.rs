use std::path::PathBuf;

use clap::Parser;

/// Command-line / environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "nba-dashboard")]
#[command(about = "Cumulative win/loss dashboard for historical NBA games", long_about = None)]
pub struct DashboardConfig {
    /// Game table to load (.csv, .json or .parquet)
    #[arg(short, long, env = "NBA_DASHBOARD_DATA", default_value = "nba_all_elo.csv")]
    pub data: PathBuf,

    /// Initial window width in points
    #[arg(long, default_value_t = 1400.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 850.0)]
    pub height: f32,
}
