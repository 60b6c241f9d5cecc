//! # tsdiag
//!
//! Command-line interface for time series diagnostics: reads a date/value
//! table (CSV, JSON or Excel), runs the diagnostic pipeline and prints the
//! report as JSON.

use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use clap::{Parser, Subcommand};
use diagnostic_facade::{
    diagnose, DecompositionModel, DiagnosticConfig, Frequency, LagSelection, RawObservation,
};
use series_facade::SeriesConditioner;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "tsdiag")]
#[command(about = "Time series diagnostics and forecasting method suggestions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test stationarity, decompose and recommend forecasting methods
    Diagnose {
        #[command(flatten)]
        table: TableArgs,

        /// Seasonal period (default: from frequency, then autocorrelation)
        #[arg(short, long)]
        period: Option<usize>,

        /// Decomposition model (additive, multiplicative)
        #[arg(short, long)]
        model: Option<String>,

        /// Significance level for the stationarity verdict
        #[arg(long)]
        significance: Option<f64>,

        /// Fixed number of lagged differences (default: chosen by AIC)
        #[arg(long)]
        lags: Option<usize>,

        /// JSON configuration file; flags override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Condition the series only and print it with its summary
    Condition {
        #[command(flatten)]
        table: TableArgs,

        /// Keep interior gaps instead of interpolating
        #[arg(long)]
        no_interpolate: bool,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct TableArgs {
    /// Input file (CSV, JSON or XLSX)
    #[arg(short, long)]
    input: PathBuf,

    /// Column name or index for timestamps (default: first column)
    #[arg(short, long)]
    date_column: Option<String>,

    /// Column name or index for values (default: second column)
    #[arg(short, long)]
    value_column: Option<String>,

    /// Sampling frequency alias, e.g. D, W, M, Q, 15min (default: inferred)
    #[arg(short, long)]
    frequency: Option<String>,
}

/// Resolve a column given by name or index
fn column_index<'a>(
    headers: impl IntoIterator<Item = &'a str>,
    column: Option<&str>,
    default: usize,
) -> CliResult<usize> {
    let Some(col) = column else {
        return Ok(default);
    };
    if let Ok(idx) = col.parse::<usize>() {
        return Ok(idx);
    }
    headers
        .into_iter()
        .position(|h| h.trim() == col)
        .ok_or_else(|| format!("Column '{}' not found", col))
}

/// Resolve the date and value columns, which must differ
fn date_value_columns<'a>(
    headers: impl IntoIterator<Item = &'a str> + Clone,
    date: Option<&str>,
    value: Option<&str>,
) -> CliResult<(usize, usize)> {
    let date_idx = column_index(headers.clone(), date, 0)?;
    let value_idx = column_index(headers, value, 1)?;
    if date_idx == value_idx {
        return Err("Date and value columns must differ".to_string());
    }
    Ok((date_idx, value_idx))
}

/// Parse a value cell; empty or non-numeric cells are missing
fn parse_value(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

/// Load rows from a CSV file with a header line
fn load_csv_rows(
    path: &Path,
    date: Option<&str>,
    value: Option<&str>,
) -> CliResult<Vec<RawObservation>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();
    let names: Vec<&str> = headers.iter().collect();
    let (date_idx, value_idx) = date_value_columns(names.iter().copied(), date, value)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        let Some(timestamp) = record.get(date_idx) else {
            continue;
        };
        let value = record.get(value_idx).and_then(parse_value);
        rows.push(RawObservation::new(timestamp, value));
    }
    Ok(rows)
}

/// Load rows from a JSON array of objects
fn load_json_rows(
    path: &Path,
    date: Option<&str>,
    value: Option<&str>,
) -> CliResult<Vec<RawObservation>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;
    let arr = json
        .as_array()
        .ok_or("Expected a JSON array of objects")?;

    let date_key = date.unwrap_or("date");
    let value_key = value.unwrap_or("value");
    let rows = arr
        .iter()
        .filter_map(|obj| {
            let timestamp = match obj.get(date_key)? {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let value = match obj.get(value_key) {
                Some(serde_json::Value::String(s)) => parse_value(s),
                Some(v) => v.as_f64(),
                None => None,
            };
            Some(RawObservation::new(timestamp, value))
        })
        .collect();
    Ok(rows)
}

/// Timestamp text of an Excel cell; date cells are rendered as ISO text
fn excel_timestamp(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) => Some(s.clone()),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        other => Some(other.to_string()),
    }
}

/// Numeric value of an Excel cell; anything else is missing
fn excel_value(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => parse_value(s),
        _ => None,
    }
}

/// Load rows from the first worksheet of an XLSX workbook with a header row
fn load_xlsx_rows(
    path: &Path,
    date: Option<&str>,
    value: Option<&str>,
) -> CliResult<Vec<RawObservation>> {
    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|e| format!("Failed to open Excel file: {}", e))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or("Excel file has no sheets")?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| format!("Failed to read sheet '{}': {}", sheet, e))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .ok_or("Excel sheet is empty")?
        .iter()
        .map(|cell| cell.to_string())
        .collect();
    let (date_idx, value_idx) =
        date_value_columns(headers.iter().map(String::as_str), date, value)?;

    let rows = rows_iter
        .filter_map(|row| {
            let timestamp = row.get(date_idx).and_then(excel_timestamp)?;
            let value = row.get(value_idx).and_then(excel_value);
            Some(RawObservation::new(timestamp, value))
        })
        .collect();
    Ok(rows)
}

/// Load rows from file (auto-detect format)
fn load_rows(table: &TableArgs) -> CliResult<Vec<RawObservation>> {
    let path = table.input.as_path();
    let date = table.date_column.as_deref();
    let value = table.value_column.as_deref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let rows = match ext.as_str() {
        "json" => load_json_rows(path, date, value)?,
        "xlsx" => load_xlsx_rows(path, date, value)?,
        _ => load_csv_rows(path, date, value)?,
    };
    if rows.is_empty() {
        return Err("No rows found in input".to_string());
    }
    info!(rows = rows.len(), path = %path.display(), "loaded input");
    Ok(rows)
}

/// Load a configuration file
fn load_config(path: &Path) -> CliResult<DiagnosticConfig> {
    let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| format!("Invalid config: {}", e))
}

fn parse_frequency(alias: &str) -> CliResult<Frequency> {
    alias.parse::<Frequency>().map_err(|e| e.to_string())
}

/// Write a JSON document to file or stdout
fn write_json(value: &impl serde::Serialize, output: Option<&PathBuf>) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize: {}", e))?;
    if let Some(path) = output {
        std::fs::write(path, json).map_err(|e| format!("Failed to write output: {}", e))?;
        eprintln!("Report written to {:?}", path);
    } else {
        println!("{}", json);
    }
    Ok(())
}

/// Run diagnose command
#[allow(clippy::too_many_arguments)]
fn run_diagnose(
    table: TableArgs,
    period: Option<usize>,
    model: Option<String>,
    significance: Option<f64>,
    lags: Option<usize>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let mut config = match config {
        Some(path) => load_config(&path)?,
        None => DiagnosticConfig::default(),
    };
    if let Some(alias) = &table.frequency {
        config.conditioner.frequency = Some(parse_frequency(alias)?);
    }
    if let Some(period) = period {
        config.decomposition.period = Some(period);
    }
    if let Some(model) = model {
        config.decomposition.model = model
            .parse::<DecompositionModel>()
            .map_err(|e| e.to_string())?;
    }
    if let Some(significance) = significance {
        config.stationarity.significance = significance;
    }
    if let Some(lag) = lags {
        config.stationarity.lag_selection = LagSelection::Fixed(lag);
    }
    debug!(?config, "effective configuration");

    let rows = load_rows(&table)?;
    let report = diagnose(&rows, &config).map_err(|e| e.to_string())?;
    write_json(&report, output.as_ref())
}

/// Run condition command
fn run_condition(
    table: TableArgs,
    no_interpolate: bool,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let mut config = series_facade::ConditionerConfig {
        interpolate: !no_interpolate,
        ..Default::default()
    };
    if let Some(alias) = &table.frequency {
        config.frequency = Some(parse_frequency(alias)?);
    }

    let rows = load_rows(&table)?;
    let conditioned = config
        .conditioner()
        .condition(&rows)
        .map_err(|e| e.to_string())?;
    write_json(&conditioned, output.as_ref())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diagnose {
            table,
            period,
            model,
            significance,
            lags,
            config,
            output,
        } => run_diagnose(table, period, model, significance, lags, config, output),

        Commands::Condition {
            table,
            no_interpolate,
            output,
        } => run_condition(table, no_interpolate, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_by_name_and_position() {
        let headers = csv::StringRecord::from(vec!["Date", "Sales", "Region"]);
        assert_eq!(column_index(headers.iter(), Some("Sales"), 1).unwrap(), 1);
        assert_eq!(column_index(headers.iter(), Some("2"), 1).unwrap(), 2);
        assert_eq!(column_index(headers.iter(), None, 1).unwrap(), 1);
        assert!(column_index(headers.iter(), Some("Missing"), 1).is_err());
    }

    #[test]
    fn test_date_and_value_columns_must_differ() {
        let headers = ["Date", "Sales"];
        assert_eq!(
            date_value_columns(headers.iter().copied(), None, Some("Sales")).unwrap(),
            (0, 1)
        );
        assert!(date_value_columns(headers.iter().copied(), Some("Sales"), Some("1")).is_err());
    }

    #[test]
    fn test_excel_cells() {
        assert_eq!(
            excel_timestamp(&Data::String("2024-01-31".to_string())).as_deref(),
            Some("2024-01-31")
        );
        assert_eq!(excel_timestamp(&Data::Int(2020)).as_deref(), Some("2020"));
        assert_eq!(excel_timestamp(&Data::Empty), None);

        assert_eq!(excel_value(&Data::Float(2.5)), Some(2.5));
        assert_eq!(excel_value(&Data::Int(7)), Some(7.0));
        assert_eq!(excel_value(&Data::String(" 4 ".to_string())), Some(4.0));
        assert_eq!(excel_value(&Data::Bool(true)), None);
        assert_eq!(excel_value(&Data::Empty), None);
    }

    #[test]
    fn test_xlsx_input_is_not_read_as_csv() {
        let table = TableArgs {
            input: PathBuf::from("does-not-exist.xlsx"),
            date_column: None,
            value_column: None,
            frequency: None,
        };
        let err = load_rows(&table).unwrap_err();
        assert!(err.starts_with("Failed to open Excel file"), "{}", err);
    }

    #[test]
    fn test_cli_parses_fixed_lags() {
        let cli =
            Cli::try_parse_from(["tsdiag", "diagnose", "--input", "data.csv", "--lags", "3"])
                .unwrap();
        match cli.command {
            Commands::Diagnose { lags, .. } => assert_eq!(lags, Some(3)),
            _ => panic!("expected diagnose"),
        }
        assert!(
            Cli::try_parse_from(["tsdiag", "diagnose", "--input", "data.csv", "--max-lag", "3"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 3.5 "), Some(3.5));
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("n/a"), None);
    }

    #[test]
    fn test_cli_parses_diagnose() {
        let cli = Cli::try_parse_from([
            "tsdiag", "diagnose", "--input", "data.csv", "--frequency", "M", "--period", "12",
            "--model", "multiplicative",
        ])
        .unwrap();
        match cli.command {
            Commands::Diagnose { table, period, model, .. } => {
                assert_eq!(table.frequency.as_deref(), Some("M"));
                assert_eq!(period, Some(12));
                assert_eq!(model.as_deref(), Some("multiplicative"));
            }
            _ => panic!("expected diagnose"),
        }
    }
}
