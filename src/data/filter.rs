use super::model::{GameRecord, GameTable, GameType};

// ---------------------------------------------------------------------------
// Filter criteria: the three sidebar selections
// ---------------------------------------------------------------------------

/// Year / team / game-type selection driving the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year: i32,
    pub team: String,
    pub game_type: GameType,
}

impl FilterCriteria {
    /// Default selection for a table: latest year, first team of that year,
    /// both game types. `None` for an empty table.
    pub fn initial(table: &GameTable) -> Option<Self> {
        let year = table.latest_year()?;
        let team = table.teams_in_year(year).first()?.clone();
        Some(FilterCriteria {
            year,
            team,
            game_type: GameType::Both,
        })
    }

    /// Switch to another season, keeping the team when it also played that
    /// year and falling back to the first team otherwise.
    pub fn set_year(&mut self, table: &GameTable, year: i32) {
        self.year = year;
        let teams = table.teams_in_year(year);
        if !teams.iter().any(|t| *t == self.team) {
            if let Some(first) = teams.first() {
                self.team = first.clone();
            }
        }
    }
}

/// Return the games of `team` in season `year` that pass `game_type`,
/// ordered by date.
///
/// The sort is stable, so games sharing a date keep their table order.
/// No match yields an empty vector.
pub fn filter<'a>(
    table: &'a GameTable,
    year: i32,
    team: &str,
    game_type: GameType,
) -> Vec<&'a GameRecord> {
    let mut games: Vec<&GameRecord> = table
        .games
        .iter()
        .filter(|g| g.year == year && g.team == team && game_type.accepts(g.is_playoffs))
        .collect();
    games.sort_by_key(|g| g.date);
    games
}

/// [`filter`] driven by a [`FilterCriteria`].
pub fn filter_by<'a>(table: &'a GameTable, criteria: &FilterCriteria) -> Vec<&'a GameRecord> {
    filter(table, criteria.year, &criteria.team, criteria.game_type)
}
