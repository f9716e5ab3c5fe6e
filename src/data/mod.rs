/// Data layer: game table types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → GameTable (once per process, see cache)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ GameTable │  Vec<GameRecord>, year/team index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year + team + game type → date-ordered games
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  running win/loss counts, totals, win %
///   └───────────┘
/// ```

pub mod aggregate;
pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
