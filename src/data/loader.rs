use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Date32Type, Int16Type, Int32Type, Int64Type, Int8Type};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::file::reader::ChunkReader;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::cache::LoadOnce;
use super::model::{GameRecord, GameResult, GameTable};

pub const YEAR_COLUMN: &str = "year_id";
pub const TEAM_COLUMN: &str = "team_id";
pub const DATE_COLUMN: &str = "date_game";
pub const RESULT_COLUMN: &str = "game_result";
pub const PLAYOFFS_COLUMN: &str = "is_playoffs";

const REQUIRED_COLUMNS: [&str; 5] = [
    YEAR_COLUMN,
    TEAM_COLUMN,
    DATE_COLUMN,
    RESULT_COLUMN,
    PLAYOFFS_COLUMN,
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why the game table could not be loaded. Always fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid {column} value '{value}'")]
    Malformed {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("{} contains no games", .0.display())]
    Empty(PathBuf),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

static GAMES: LoadOnce<GameTable> = LoadOnce::new();

/// Load the game table once for the lifetime of the process.
///
/// The first successful call reads `path`; every later call returns that
/// same table without touching the filesystem, whatever path it is given.
pub fn load(path: &Path) -> Result<&'static GameTable, LoadError> {
    GAMES.get_or_try_load(|| load_file(path))
}

/// Read a game table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, `nba_all_elo.csv` column names (default)
/// * `.json`    – `[{ "year_id": 2015, "team_id": "GSW", ... }, ...]`
/// * `.parquet` – same column names as the CSV layout
pub fn load_file(path: &Path) -> Result<GameTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("csv")
        .to_ascii_lowercase();

    let open = || {
        File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    let games = match ext.as_str() {
        "csv" => read_csv(BufReader::new(open()?))?,
        "json" => read_json(BufReader::new(open()?))?,
        "parquet" | "pq" => read_parquet(open()?)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    if games.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    Ok(GameTable::from_games(games))
}

// ---------------------------------------------------------------------------
// Field parsing shared by all formats
// ---------------------------------------------------------------------------

/// `M/D/YYYY` as written by the source table, or ISO `YYYY-MM-DD`.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

fn parse_playoff_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "0" | "false" => Some(false),
        "1" | "true" => Some(true),
        _ => None,
    }
}

fn malformed(row: usize, column: &'static str, value: impl Into<String>) -> LoadError {
    LoadError::Malformed {
        row,
        column,
        value: value.into(),
    }
}

fn date_field(row: usize, date: &str) -> Result<NaiveDate, LoadError> {
    parse_date(date).ok_or_else(|| malformed(row, DATE_COLUMN, date))
}

/// Team and result checks applied to every row, whatever the source format.
fn build_record(
    row: usize,
    year: i32,
    team: String,
    date: NaiveDate,
    result: &str,
    is_playoffs: bool,
) -> Result<GameRecord, LoadError> {
    let result = GameResult::parse(result).ok_or_else(|| malformed(row, RESULT_COLUMN, result))?;
    if team.trim().is_empty() {
        return Err(malformed(row, TEAM_COLUMN, team));
    }
    Ok(GameRecord {
        year,
        team,
        date,
        result,
        is_playoffs,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Columns the dashboard needs; every other CSV column is ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    year_id: i32,
    team_id: String,
    date_game: String,
    game_result: String,
    is_playoffs: String,
}

/// Parse a CSV game table. Row numbers in errors count data rows from 1.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<GameRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut games = Vec::new();
    for (i, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = i + 1;
        let raw = result?;
        let is_playoffs = parse_playoff_flag(&raw.is_playoffs)
            .ok_or_else(|| malformed(row, PLAYOFFS_COLUMN, raw.is_playoffs.as_str()))?;
        let date = date_field(row, &raw.date_game)?;
        games.push(build_record(
            row,
            raw.year_id,
            raw.team_id,
            date,
            &raw.game_result,
            is_playoffs,
        )?);
    }
    Ok(games)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented layout (`df.to_json(orient='records')`).
#[derive(Debug, Deserialize)]
struct JsonRow {
    year_id: i32,
    team_id: String,
    date_game: String,
    game_result: String,
    is_playoffs: JsonValue,
}

fn json_playoff_flag(val: &JsonValue) -> Option<bool> {
    match val {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        JsonValue::String(s) => parse_playoff_flag(s),
        _ => None,
    }
}

pub fn read_json<R: Read>(input: R) -> Result<Vec<GameRecord>, LoadError> {
    let rows: Vec<JsonRow> = serde_json::from_reader(input)?;
    rows.into_iter()
        .enumerate()
        .map(|(i, raw)| {
            let row = i + 1;
            let is_playoffs = json_playoff_flag(&raw.is_playoffs)
                .ok_or_else(|| malformed(row, PLAYOFFS_COLUMN, raw.is_playoffs.to_string()))?;
            let date = date_field(row, &raw.date_game)?;
            build_record(
                row,
                raw.year_id,
                raw.team_id,
                date,
                &raw.game_result,
                is_playoffs,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet game table.
///
/// Expected schema:
/// - `year_id`: Int16 / Int32 / Int64
/// - `team_id`, `game_result`: Utf8 or LargeUtf8
/// - `date_game`: Utf8 (same text formats as CSV) or Date32
/// - `is_playoffs`: Int8..Int64 (0/1) or Boolean
pub fn read_parquet<T: ChunkReader + 'static>(input: T) -> Result<Vec<GameRecord>, LoadError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(input)?.build()?;

    let mut games = Vec::new();
    for batch in reader {
        let batch = batch?;
        read_batch(&batch, games.len(), &mut games)?;
    }
    Ok(games)
}

fn read_batch(
    batch: &RecordBatch,
    rows_before: usize,
    games: &mut Vec<GameRecord>,
) -> Result<(), LoadError> {
    let years = column(batch, YEAR_COLUMN)?;
    let teams = column(batch, TEAM_COLUMN)?;
    let dates = column(batch, DATE_COLUMN)?;
    let results = column(batch, RESULT_COLUMN)?;
    let playoffs = column(batch, PLAYOFFS_COLUMN)?;

    for idx in 0..batch.num_rows() {
        let row = rows_before + idx + 1;
        let year = int_at(years, idx)
            .and_then(|y| i32::try_from(y).ok())
            .ok_or_else(|| malformed(row, YEAR_COLUMN, cell_text(years, idx)))?;
        let team =
            string_at(teams, idx).ok_or_else(|| malformed(row, TEAM_COLUMN, cell_text(teams, idx)))?;
        let result = string_at(results, idx)
            .ok_or_else(|| malformed(row, RESULT_COLUMN, cell_text(results, idx)))?;
        let is_playoffs = bool_at(playoffs, idx)
            .ok_or_else(|| malformed(row, PLAYOFFS_COLUMN, cell_text(playoffs, idx)))?;

        let date = match dates.data_type() {
            DataType::Date32 if !dates.is_null(idx) => dates
                .as_primitive::<Date32Type>()
                .value_as_date(idx)
                .ok_or_else(|| malformed(row, DATE_COLUMN, cell_text(dates, idx)))?,
            _ => {
                let text = string_at(dates, idx)
                    .ok_or_else(|| malformed(row, DATE_COLUMN, cell_text(dates, idx)))?;
                date_field(row, &text)?
            }
        };
        games.push(build_record(row, year, team, date, &result, is_playoffs)?);
    }
    Ok(())
}

// -- Arrow cell helpers --

fn column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef, LoadError> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| LoadError::MissingColumn(name))?;
    Ok(batch.column(idx))
}

fn int_at(col: &ArrayRef, row: usize) -> Option<i64> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Int8 => Some(col.as_primitive::<Int8Type>().value(row) as i64),
        DataType::Int16 => Some(col.as_primitive::<Int16Type>().value(row) as i64),
        DataType::Int32 => Some(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => Some(col.as_primitive::<Int64Type>().value(row)),
        _ => None,
    }
}

fn string_at(col: &ArrayRef, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => Some(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => None,
    }
}

fn bool_at(col: &ArrayRef, row: usize) -> Option<bool> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Boolean => Some(col.as_boolean().value(row)),
        DataType::Utf8 | DataType::LargeUtf8 => string_at(col, row).as_deref().and_then(parse_playoff_flag),
        _ => match int_at(col, row)? {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        },
    }
}

/// Best-effort rendering of a cell for error messages.
fn cell_text(col: &ArrayRef, row: usize) -> String {
    if col.is_null(row) {
        return "<null>".to_string();
    }
    string_at(col, row)
        .or_else(|| int_at(col, row).map(|v| v.to_string()))
        .unwrap_or_else(|| format!("<{:?}>", col.data_type()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "gameorder,year_id,date_game,is_playoffs,team_id,pts,game_result,notes";

    fn csv_of(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn csv_source_layout_is_parsed() {
        let text = csv_of(&[
            "1,1947,11/1/1946,0,TRH,66,L,",
            "2,1947,11/1/1946,0,NYK,68,W,",
            "3,1947,4/16/1947,1,PHW,83,W,\"Finals, game 1\"",
        ]);
        let games = read_csv(text.as_bytes()).unwrap();

        assert_eq!(games.len(), 3);
        assert_eq!(games[0].year, 1947);
        assert_eq!(games[0].team, "TRH");
        assert_eq!(games[0].date, NaiveDate::from_ymd_opt(1946, 11, 1).unwrap());
        assert_eq!(games[0].result, GameResult::Loss);
        assert!(!games[0].is_playoffs);
        assert!(games[2].is_playoffs);
        assert_eq!(games[2].result, GameResult::Win);
    }

    #[test]
    fn csv_accepts_iso_dates() {
        let text = csv_of(&["1,2020,2020-01-05,false,A,100,W,"]);
        let games = read_csv(text.as_bytes()).unwrap();
        assert_eq!(games[0].date, NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
    }

    #[test]
    fn csv_missing_column_is_reported() {
        let text = "year_id,team_id,date_game,game_result\n2020,A,1/1/2020,W";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(PLAYOFFS_COLUMN)));
    }

    #[test]
    fn csv_unknown_result_marker_is_malformed() {
        let text = csv_of(&["1,2020,1/1/2020,0,A,100,W,", "2,2020,1/2/2020,0,A,100,T,"]);
        match read_csv(text.as_bytes()).unwrap_err() {
            LoadError::Malformed { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, RESULT_COLUMN);
                assert_eq!(value, "T");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_bad_date_and_flag_are_malformed() {
        let bad_date = csv_of(&["1,2020,13/45/2020,0,A,100,W,"]);
        assert!(matches!(
            read_csv(bad_date.as_bytes()),
            Err(LoadError::Malformed { column: DATE_COLUMN, .. })
        ));

        let bad_flag = csv_of(&["1,2020,1/1/2020,2,A,100,W,"]);
        assert!(matches!(
            read_csv(bad_flag.as_bytes()),
            Err(LoadError::Malformed { column: PLAYOFFS_COLUMN, .. })
        ));
    }

    #[test]
    fn csv_non_numeric_year_is_a_csv_error() {
        let text = csv_of(&["1,abc,1/1/2020,0,A,100,W,"]);
        assert!(matches!(read_csv(text.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn json_records_are_parsed() {
        let text = r#"[
            {"year_id": 2016, "team_id": "GSW", "date_game": "10/27/2015", "game_result": "W", "is_playoffs": 0, "pts": 111},
            {"year_id": 2016, "team_id": "GSW", "date_game": "2016-06-19", "game_result": "L", "is_playoffs": true}
        ]"#;
        let games = read_json(text.as_bytes()).unwrap();

        assert_eq!(games.len(), 2);
        assert!(!games[0].is_playoffs);
        assert!(games[1].is_playoffs);
        assert_eq!(games[1].date, NaiveDate::from_ymd_opt(2016, 6, 19).unwrap());
        assert_eq!(games[1].result, GameResult::Loss);
    }

    #[test]
    fn json_bad_flag_is_malformed() {
        let text = r#"[{"year_id": 2016, "team_id": "GSW", "date_game": "10/27/2015", "game_result": "W", "is_playoffs": 3}]"#;
        assert!(matches!(
            read_json(text.as_bytes()),
            Err(LoadError::Malformed { row: 1, column: PLAYOFFS_COLUMN, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("definitely/not/here/nba_all_elo.csv");
        assert!(matches!(load_file(path), Err(LoadError::Io { .. })));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = Path::new("games.xlsx");
        assert!(matches!(
            load_file(path),
            Err(LoadError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn header_only_file_is_empty_error() {
        let path = std::env::temp_dir().join(format!("nba_dashboard_empty_{}.csv", std::process::id()));
        std::fs::write(&path, "year_id,team_id,date_game,game_result,is_playoffs\n").unwrap();
        let result = load_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(LoadError::Empty(_))));
    }

    #[test]
    fn csv_padded_headers_are_trimmed() {
        let text = " year_id , team_id,date_game ,game_result,is_playoffs\n2020,A,1/1/2020,W,0";
        let games = read_csv(text.as_bytes()).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].year, 2020);
    }

    // -- Parquet --

    use std::sync::Arc;

    use arrow::array::{
        BooleanArray, Date32Array, Int16Array, Int32Array, Int64Array, StringArray,
    };
    use parquet::arrow::ArrowWriter;

    /// Days from 1970-01-01 to 2020-01-01.
    const JAN_1_2020: i32 = 18262;

    fn batch_of(columns: Vec<(&str, ArrayRef)>) -> RecordBatch {
        RecordBatch::try_from_iter(columns).unwrap()
    }

    fn write_parquet(name: &str, batch: &RecordBatch) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "nba_dashboard_{name}_{}.parquet",
            std::process::id()
        ));
        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
        writer.write(batch).unwrap();
        writer.close().unwrap();
        path
    }

    fn load_parquet(name: &str, batch: &RecordBatch) -> Result<GameTable, LoadError> {
        let path = write_parquet(name, batch);
        let result = load_file(&path);
        std::fs::remove_file(&path).ok();
        result
    }

    fn strings(values: &[&str]) -> ArrayRef {
        Arc::new(StringArray::from(values.to_vec()))
    }

    #[test]
    fn parquet_date32_and_boolean_columns() {
        let batch = batch_of(vec![
            ("year_id", Arc::new(Int64Array::from(vec![2020, 2020])) as ArrayRef),
            ("team_id", strings(&["BOS", "BOS"])),
            ("date_game", Arc::new(Date32Array::from(vec![JAN_1_2020, JAN_1_2020 + 1]))),
            ("game_result", strings(&["W", "L"])),
            ("is_playoffs", Arc::new(BooleanArray::from(vec![false, true]))),
            ("pts", Arc::new(Int64Array::from(vec![101, 99]))),
        ]);
        let table = load_parquet("date32", &batch).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.games[0].date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(table.games[1].date, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
        assert_eq!(table.games[0].result, GameResult::Win);
        assert!(!table.games[0].is_playoffs);
        assert!(table.games[1].is_playoffs);
        assert_eq!(table.teams_in_year(2020), ["BOS"]);
    }

    #[test]
    fn parquet_text_dates_int16_years_and_text_flags() {
        let batch = batch_of(vec![
            ("year_id", Arc::new(Int16Array::from(vec![1947, 1947])) as ArrayRef),
            ("team_id", strings(&["NYK", "NYK"])),
            ("date_game", strings(&["11/1/1946", "1946-11-02"])),
            ("game_result", strings(&["W", "L"])),
            ("is_playoffs", strings(&["0", "true"])),
        ]);
        let table = load_parquet("text_dates", &batch).unwrap();

        assert_eq!(table.years, vec![1947]);
        assert_eq!(table.games[0].date, NaiveDate::from_ymd_opt(1946, 11, 1).unwrap());
        assert_eq!(table.games[1].date, NaiveDate::from_ymd_opt(1946, 11, 2).unwrap());
        assert!(table.games[1].is_playoffs);
    }

    #[test]
    fn parquet_int32_years_and_integer_flags() {
        let batch = batch_of(vec![
            ("year_id", Arc::new(Int32Array::from(vec![2016])) as ArrayRef),
            ("team_id", strings(&["GSW"])),
            ("date_game", strings(&["6/19/2016"])),
            ("game_result", strings(&["L"])),
            ("is_playoffs", Arc::new(Int64Array::from(vec![1]))),
        ]);
        let table = load_parquet("int32_years", &batch).unwrap();
        assert_eq!(table.games[0].year, 2016);
        assert!(table.games[0].is_playoffs);
    }

    #[test]
    fn parquet_empty_team_is_malformed_for_every_date_type() {
        let date_columns: [ArrayRef; 2] = [
            Arc::new(Date32Array::from(vec![JAN_1_2020, JAN_1_2020 + 1])),
            strings(&["1/1/2020", "1/2/2020"]),
        ];
        for (i, dates) in date_columns.into_iter().enumerate() {
            let batch = batch_of(vec![
                ("year_id", Arc::new(Int64Array::from(vec![2020, 2020])) as ArrayRef),
                ("team_id", strings(&["", "A"])),
                ("date_game", dates),
                ("game_result", strings(&["W", "L"])),
                ("is_playoffs", Arc::new(BooleanArray::from(vec![false, false]))),
            ]);
            match load_parquet(&format!("empty_team_{i}"), &batch).unwrap_err() {
                LoadError::Malformed { row, column, value } => {
                    assert_eq!((row, column, value.as_str()), (1, TEAM_COLUMN, ""));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn parquet_null_and_bad_cells_are_malformed() {
        let batch = batch_of(vec![
            ("year_id", Arc::new(Int64Array::from(vec![2020, 2020])) as ArrayRef),
            ("team_id", strings(&["A", "A"])),
            ("date_game", strings(&["1/1/2020", "1/2/2020"])),
            ("game_result", Arc::new(StringArray::from(vec![Some("W"), None]))),
            ("is_playoffs", Arc::new(Int64Array::from(vec![0, 0]))),
        ]);
        match load_parquet("null_result", &batch).unwrap_err() {
            LoadError::Malformed { row, column, value } => {
                assert_eq!((row, column, value.as_str()), (2, RESULT_COLUMN, "<null>"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let batch = batch_of(vec![
            ("year_id", Arc::new(Int64Array::from(vec![2020])) as ArrayRef),
            ("team_id", strings(&["A"])),
            ("date_game", strings(&["1/1/2020"])),
            ("game_result", strings(&["W"])),
            ("is_playoffs", Arc::new(Int64Array::from(vec![2]))),
        ]);
        assert!(matches!(
            load_parquet("bad_flag", &batch),
            Err(LoadError::Malformed { row: 1, column: PLAYOFFS_COLUMN, .. })
        ));
    }

    #[test]
    fn parquet_missing_column_is_reported() {
        let batch = batch_of(vec![
            ("year_id", Arc::new(Int64Array::from(vec![2020])) as ArrayRef),
            ("team_id", strings(&["A"])),
            ("date_game", strings(&["1/1/2020"])),
            ("game_result", strings(&["W"])),
        ]);
        assert!(matches!(
            load_parquet("missing_flag", &batch),
            Err(LoadError::MissingColumn(PLAYOFFS_COLUMN))
        ));
    }

    #[test]
    fn row_numbers_continue_across_batches() {
        let first = batch_of(vec![
            ("year_id", Arc::new(Int64Array::from(vec![2020, 2020])) as ArrayRef),
            ("team_id", strings(&["A", "A"])),
            ("date_game", strings(&["1/1/2020", "1/2/2020"])),
            ("game_result", strings(&["W", "L"])),
            ("is_playoffs", Arc::new(Int64Array::from(vec![0, 0]))),
        ]);
        let second = batch_of(vec![
            ("year_id", Arc::new(Int64Array::from(vec![2020, 2020])) as ArrayRef),
            ("team_id", strings(&["A", "A"])),
            ("date_game", strings(&["1/3/2020", "not a date"])),
            ("game_result", strings(&["W", "W"])),
            ("is_playoffs", Arc::new(Int64Array::from(vec![0, 0]))),
        ]);

        let mut games = Vec::new();
        read_batch(&first, games.len(), &mut games).unwrap();
        assert_eq!(games.len(), 2);
        match read_batch(&second, games.len(), &mut games).unwrap_err() {
            LoadError::Malformed { row, column, .. } => {
                assert_eq!((row, column), (4, DATE_COLUMN));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
