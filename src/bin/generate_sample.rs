//! Writes a synthetic game table in the `nba_all_elo.csv` layout
//! (`sample_games.csv` and `sample_games.parquet`) so the dashboard can be
//! tried without the real dataset.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Int32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use chrono::{Duration, NaiveDate};
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const TEAMS: [(&str, f64); 8] = [
    ("BOS", 0.62),
    ("LAL", 0.58),
    ("MIA", 0.54),
    ("GSW", 0.52),
    ("CHI", 0.48),
    ("NYK", 0.46),
    ("DEN", 0.44),
    ("DET", 0.36),
];
const SEASONS: std::ops::RangeInclusive<i32> = 2019..=2023;
const ROUNDS: usize = 6;
/// Wins needed to take a playoff series (best of seven).
const SERIES_WINS: u32 = 4;

/// One row per team per game, as in the source table.
#[derive(Debug, Clone, Serialize)]
struct Row {
    gameorder: i64,
    game_id: String,
    year_id: i32,
    date_game: String,
    seasongame: i64,
    is_playoffs: i64,
    team_id: String,
    pts: i64,
    opp_id: String,
    opp_pts: i64,
    game_result: String,
}

struct Season {
    year: i32,
    date: NaiveDate,
    rows: Vec<Row>,
    games_played: [i64; TEAMS.len()],
    wins: [u32; TEAMS.len()],
}

impl Season {
    fn new(year: i32) -> Self {
        Season {
            year,
            date: NaiveDate::from_ymd_opt(year - 1, 10, 20).unwrap_or_default(),
            rows: Vec::new(),
            games_played: [0; TEAMS.len()],
            wins: [0; TEAMS.len()],
        }
    }

    /// Play one game between two teams and record both perspectives.
    /// Returns whether `home` won.
    fn play(&mut self, home: usize, away: usize, is_playoffs: bool, rng: &mut StdRng) -> bool {
        let (h_strength, a_strength) = (TEAMS[home].1, TEAMS[away].1);
        let p_home = h_strength / (h_strength + a_strength) + 0.03;
        let home_won = rng.gen::<f64>() < p_home;

        let loser_pts: i64 = rng.gen_range(88..=115);
        let winner_pts = loser_pts + rng.gen_range(1..=18);
        let (h_pts, a_pts) = if home_won {
            (winner_pts, loser_pts)
        } else {
            (loser_pts, winner_pts)
        };

        let game_id = format!(
            "{}{}",
            self.date.format("%Y%m%d"),
            TEAMS[home].0
        );
        for (team, opp, pts, opp_pts, won) in [
            (home, away, h_pts, a_pts, home_won),
            (away, home, a_pts, h_pts, !home_won),
        ] {
            self.games_played[team] += 1;
            if won && !is_playoffs {
                self.wins[team] += 1;
            }
            self.rows.push(Row {
                gameorder: 0,
                game_id: game_id.clone(),
                year_id: self.year,
                date_game: self.date.format("%-m/%-d/%Y").to_string(),
                seasongame: self.games_played[team],
                is_playoffs: is_playoffs as i64,
                team_id: TEAMS[team].0.to_string(),
                pts,
                opp_id: TEAMS[opp].0.to_string(),
                opp_pts,
                game_result: if won { "W" } else { "L" }.to_string(),
            });
        }
        home_won
    }

    fn next_day(&mut self, days: i64) {
        self.date += Duration::days(days);
    }

    /// Best-of-seven series; returns the winner.
    fn series(&mut self, a: usize, b: usize, rng: &mut StdRng) -> usize {
        let (mut a_wins, mut b_wins) = (0, 0);
        let mut game = 0;
        while a_wins < SERIES_WINS && b_wins < SERIES_WINS {
            let (home, away) = if game % 2 == 0 { (a, b) } else { (b, a) };
            let home_won = self.play(home, away, true, rng);
            if home_won == (home == a) {
                a_wins += 1;
            } else {
                b_wins += 1;
            }
            game += 1;
            self.next_day(2);
        }
        if a_wins == SERIES_WINS {
            a
        } else {
            b
        }
    }
}

fn simulate_season(year: i32, rng: &mut StdRng) -> Vec<Row> {
    let mut season = Season::new(year);
    let n = TEAMS.len();

    // Regular season: every pair meets once per round, home side alternating.
    for round in 0..ROUNDS {
        for i in 0..n {
            for j in (i + 1)..n {
                let (home, away) = if round % 2 == 0 { (i, j) } else { (j, i) };
                season.play(home, away, false, rng);
                if rng.gen::<f64>() < 0.3 {
                    season.next_day(1);
                }
            }
        }
        season.next_day(3);
    }

    // Playoffs: top four by regular-season wins, 1v4 and 2v3, then finals.
    let mut seeds: Vec<usize> = (0..n).collect();
    seeds.sort_by(|&a, &b| season.wins[b].cmp(&season.wins[a]).then(a.cmp(&b)));
    season.next_day(4);
    let east = season.series(seeds[0], seeds[3], rng);
    let west = season.series(seeds[1], seeds[2], rng);
    season.next_day(3);
    season.series(east, west, rng);

    season.rows
}

fn write_parquet(rows: &[Row], path: &str) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("gameorder", DataType::Int64, false),
        Field::new("year_id", DataType::Int32, false),
        Field::new("date_game", DataType::Utf8, false),
        Field::new("is_playoffs", DataType::Int64, false),
        Field::new("team_id", DataType::Utf8, false),
        Field::new("pts", DataType::Int64, false),
        Field::new("opp_id", DataType::Utf8, false),
        Field::new("game_result", DataType::Utf8, false),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.gameorder))),
        Arc::new(Int32Array::from_iter_values(rows.iter().map(|r| r.year_id))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.date_game))),
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.is_playoffs))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.team_id))),
        Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.pts))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.opp_id))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| &r.game_result))),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let preview = batch.slice(0, batch.num_rows().min(6));
    let table = pretty_format_batches(&[preview]).context("formatting preview")?;
    println!("{table}");

    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn write_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);

    let mut rows: Vec<Row> = SEASONS.flat_map(|year| simulate_season(year, &mut rng)).collect();
    for (i, row) in rows.iter_mut().enumerate() {
        row.gameorder = (i / 2 + 1) as i64;
    }

    write_csv(&rows, "sample_games.csv")?;
    write_parquet(&rows, "sample_games.parquet")?;

    log::info!("generated {} rows over seasons {:?}", rows.len(), SEASONS);
    println!(
        "Wrote {} rows ({} games, {} teams) to sample_games.csv and sample_games.parquet",
        rows.len(),
        rows.len() / 2,
        TEAMS.len()
    );
    Ok(())
}
