use std::path::PathBuf;

use crate::data::aggregate::{aggregate, AggregateResult};
use crate::data::filter::{filter_by, FilterCriteria};
use crate::data::model::{GameRecord, GameTable, GameType};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Game table, loaded once before the window opens.
    pub table: &'static GameTable,

    /// Where the table was read from (shown in the top bar).
    pub source: PathBuf,

    /// Current sidebar selection. `None` only for an empty table.
    pub criteria: Option<FilterCriteria>,

    /// Games passing the current criteria, ordered by date (cached).
    pub visible: Vec<&'static GameRecord>,

    /// Running totals over `visible` (cached).
    pub aggregate: AggregateResult,

    /// Whether the game log table is expanded.
    pub show_game_log: bool,
}

impl AppState {
    pub fn new(table: &'static GameTable, source: PathBuf) -> Self {
        let mut state = Self {
            table,
            source,
            criteria: FilterCriteria::initial(table),
            visible: Vec::new(),
            aggregate: AggregateResult::default(),
            show_game_log: false,
        };
        state.refresh();
        state
    }

    /// Re-run filter and aggregation for the current criteria.
    pub fn refresh(&mut self) {
        let table: &'static GameTable = self.table;
        self.visible = match &self.criteria {
            Some(criteria) => filter_by(table, criteria),
            None => Vec::new(),
        };
        self.aggregate = aggregate(&self.visible);

        if let Some(c) = &self.criteria {
            log::debug!(
                "{} {} ({}): {} games, {}-{}",
                c.team,
                c.year,
                c.game_type,
                self.aggregate.total_games,
                self.aggregate.total_wins,
                self.aggregate.total_losses
            );
        }
    }

    pub fn set_year(&mut self, year: i32) {
        let Some(criteria) = &mut self.criteria else {
            return;
        };
        if criteria.year == year {
            return;
        }
        criteria.set_year(self.table, year);
        self.refresh();
    }

    pub fn set_team(&mut self, team: &str) {
        let Some(criteria) = &mut self.criteria else {
            return;
        };
        if criteria.team == team {
            return;
        }
        criteria.team = team.to_string();
        self.refresh();
    }

    pub fn set_game_type(&mut self, game_type: GameType) {
        let Some(criteria) = &mut self.criteria else {
            return;
        };
        if criteria.game_type == game_type {
            return;
        }
        criteria.game_type = game_type;
        self.refresh();
    }
}
