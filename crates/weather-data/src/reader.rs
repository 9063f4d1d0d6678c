//! CSV loading for daily temperature files.
//!
//! Reads a header row followed by `date,min,max` rows and turns them into
//! typed [`WeatherRecord`]s, in file order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;
use weather_core::error::{Result, WeatherError};
use weather_core::models::WeatherRecord;

/// Number of leading columns that make up a record.
const RECORD_FIELDS: usize = 3;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every record from the CSV file at `path`.
///
/// The first row is treated as a header and skipped. Blank rows are skipped.
/// Order is preserved exactly as in the file. A file with no header row at
/// all is an error; see [`read_records`].
pub fn load_data_from_csv(path: &Path) -> Result<Vec<WeatherRecord>> {
    let file = File::open(path).map_err(|source| WeatherError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(file)?;

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Decode records from any reader holding CSV text with a header row.
///
/// Input without even a header row is rejected as
/// [`WeatherError::MalformedRow`] on line 1. A header with no data rows is
/// an empty, valid dataset.
pub fn read_records<R: Read>(input: R) -> Result<Vec<WeatherRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    if reader.headers()?.is_empty() {
        return Err(WeatherError::MalformedRow {
            line: 1,
            message: "missing header row".to_string(),
        });
    }

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        if is_blank(&row) {
            continue;
        }
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        records.push(parse_row(&row, line)?);
    }

    Ok(records)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// A row whose every field is empty after trimming, e.g. `"  "` or `",,"`.
fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(str::is_empty)
}

/// Decode the first three fields of `row` into a [`WeatherRecord`].
fn parse_row(row: &StringRecord, line: u64) -> Result<WeatherRecord> {
    if row.len() < RECORD_FIELDS {
        return Err(WeatherError::MalformedRow {
            line,
            message: format!("expected {} fields, found {}", RECORD_FIELDS, row.len()),
        });
    }
    if row.len() > RECORD_FIELDS {
        debug!(
            "Ignoring {} extra field(s) on line {}",
            row.len() - RECORD_FIELDS,
            line
        );
    }

    let fields: StringRecord = row.iter().take(RECORD_FIELDS).collect();
    fields
        .deserialize::<WeatherRecord>(None)
        .map_err(|e| WeatherError::MalformedRow {
            line,
            message: deserialize_message(&e),
        })
}

/// Strip csv's record/position prefix so the message names just the field.
fn deserialize_message(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
