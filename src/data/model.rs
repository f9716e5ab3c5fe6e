use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// GameResult – outcome of a single game
// ---------------------------------------------------------------------------

/// Outcome of a game from the point of view of the row's team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Win,
    Loss,
}

impl GameResult {
    /// Parse the result marker used by the source table (`W` / `L`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "win" => Some(GameResult::Win),
            "l" | "loss" => Some(GameResult::Loss),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win => write!(f, "W"),
            GameResult::Loss => write!(f, "L"),
        }
    }
}

// ---------------------------------------------------------------------------
// GameType – the game-type selector
// ---------------------------------------------------------------------------

/// Which kind of games to keep when filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameType {
    RegularSeason,
    Playoffs,
    #[default]
    Both,
}

impl GameType {
    pub const ALL: [GameType; 3] = [GameType::RegularSeason, GameType::Playoffs, GameType::Both];

    /// Whether a game with the given playoff flag passes this selector.
    pub fn accepts(self, is_playoffs: bool) -> bool {
        match self {
            GameType::RegularSeason => !is_playoffs,
            GameType::Playoffs => is_playoffs,
            GameType::Both => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameType::RegularSeason => "Regular Season",
            GameType::Playoffs => "Playoffs",
            GameType::Both => "Both",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// GameRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single game as seen by one team (one row of the source table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Season year (`year_id`), e.g. 2015 for the 2014-15 season.
    pub year: i32,
    /// Team identifier (`team_id`), e.g. `"GSW"`.
    pub team: String,
    /// Game date, used for ordering.
    pub date: NaiveDate,
    pub result: GameResult,
    pub is_playoffs: bool,
}

impl GameRecord {
    pub fn game_type_label(&self) -> &'static str {
        if self.is_playoffs {
            GameType::Playoffs.label()
        } else {
            GameType::RegularSeason.label()
        }
    }
}

// ---------------------------------------------------------------------------
// GameTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed selector indices.
#[derive(Debug, Clone, Default)]
pub struct GameTable {
    /// All games in source order.
    pub games: Vec<GameRecord>,
    /// Sorted unique season years.
    pub years: Vec<i32>,
    /// For each season year the sorted set of teams that played in it.
    pub teams_by_year: BTreeMap<i32, Vec<String>>,
}

impl GameTable {
    /// Build selector indices from the loaded games.
    pub fn from_games(games: Vec<GameRecord>) -> Self {
        let mut teams: BTreeMap<i32, BTreeSet<String>> = BTreeMap::new();
        for game in &games {
            teams
                .entry(game.year)
                .or_default()
                .insert(game.team.clone());
        }

        let years = teams.keys().copied().collect();
        let teams_by_year = teams
            .into_iter()
            .map(|(year, set)| (year, set.into_iter().collect()))
            .collect();

        GameTable {
            games,
            years,
            teams_by_year,
        }
    }

    /// Teams that played in `year`, sorted. Empty for unknown years.
    pub fn teams_in_year(&self, year: i32) -> &[String] {
        self.teams_by_year
            .get(&year)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Number of games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
