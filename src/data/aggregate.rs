use super::model::{GameRecord, GameResult};

// ---------------------------------------------------------------------------
// AggregateResult – cumulative win/loss counts of a filtered run of games
// ---------------------------------------------------------------------------

/// Running and final win/loss counts for a date-ordered run of games.
///
/// `cumulative_wins[i]` and `cumulative_losses[i]` hold the counts after
/// game number `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateResult {
    pub cumulative_wins: Vec<u32>,
    pub cumulative_losses: Vec<u32>,
    pub total_wins: u32,
    pub total_losses: u32,
    pub total_games: usize,
}

impl AggregateResult {
    /// Wins as a percentage of games played, `None` when no games were played.
    pub fn win_percentage(&self) -> Option<f64> {
        if self.total_games == 0 {
            return None;
        }
        Some(self.total_wins as f64 / self.total_games as f64 * 100.0)
    }

    /// Win percentage rounded to one decimal, e.g. `"66.7%"`.
    pub fn win_percentage_label(&self) -> Option<String> {
        self.win_percentage().map(|pct| format!("{pct:.1}%"))
    }

    pub fn is_empty(&self) -> bool {
        self.total_games == 0
    }

    /// `(game number, cumulative wins)` pairs for plotting, game numbers start at 1.
    pub fn win_series(&self) -> Vec<[f64; 2]> {
        series(&self.cumulative_wins)
    }

    /// `(game number, cumulative losses)` pairs for plotting.
    pub fn loss_series(&self) -> Vec<[f64; 2]> {
        series(&self.cumulative_losses)
    }
}

fn series(counts: &[u32]) -> Vec<[f64; 2]> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| [(i + 1) as f64, c as f64])
        .collect()
}

/// Single forward pass over date-ordered games computing running win/loss
/// totals.
pub fn aggregate(games: &[&GameRecord]) -> AggregateResult {
    let mut cumulative_wins = Vec::with_capacity(games.len());
    let mut cumulative_losses = Vec::with_capacity(games.len());
    let (mut wins, mut losses) = (0u32, 0u32);

    for game in games {
        match game.result {
            GameResult::Win => wins += 1,
            GameResult::Loss => losses += 1,
        }
        cumulative_wins.push(wins);
        cumulative_losses.push(losses);
    }

    AggregateResult {
        cumulative_wins,
        cumulative_losses,
        total_wins: wins,
        total_losses: losses,
        total_games: games.len(),
    }
}
