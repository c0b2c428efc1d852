//! CSV loader for the adult census table.
//!
//! The file carries a header row whose names are ignored; columns are
//! read by position. Any row holding the missing-value token (or an empty
//! field) in any column is dropped before the dataset is returned.

use crate::error::DataError;
use crate::models::{Dataset, Record};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Column names, in file order.
pub const COLUMNS: [&str; 15] = [
    "age",
    "workclass",
    "fnlwgt",
    "education",
    "education-num",
    "marital-status",
    "occupation",
    "relationship",
    "race",
    "sex",
    "capital-gain",
    "capital-loss",
    "hours-per-week",
    "native-country",
    "salary",
];

/// Options controlling how the table is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Token marking an unrecorded field.
    pub missing_token: String,
    /// Whether the first row is a header to skip.
    pub has_headers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            missing_token: "?".to_string(),
            has_headers: true,
        }
    }
}

impl From<&crate::config::DataConfig> for LoadOptions {
    fn from(config: &crate::config::DataConfig) -> Self {
        Self {
            missing_token: config.missing_token.clone(),
            has_headers: config.has_headers,
        }
    }
}

/// Load and clean the census table at `path`.
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<Dataset, DataError> {
    debug!("Opening data file: {}", path.display());

    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_dataset(file, options)?;
    info!(
        "Loaded {} rows from {} ({} dropped for missing values)",
        dataset.len(),
        path.display(),
        dataset.rows_dropped()
    );

    Ok(dataset)
}

/// Parse and clean a census table from any reader.
pub fn parse_dataset<R: Read>(reader: R, options: &LoadOptions) -> Result<Dataset, DataError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut rows_read = 0;

    for result in rdr.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        // Whitespace-only lines come through as a single empty field.
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }

        if row.len() != COLUMNS.len() {
            return Err(DataError::ColumnCount {
                line,
                expected: COLUMNS.len(),
                found: row.len(),
            });
        }

        rows_read += 1;

        if row.iter().any(|field| is_missing(field, options)) {
            continue;
        }

        records.push(parse_record(&row, line)?);
    }

    debug!("Parsed {} of {} rows", records.len(), rows_read);
    Ok(Dataset::new(records, rows_read))
}

fn is_missing(field: &str, options: &LoadOptions) -> bool {
    field.is_empty() || field == options.missing_token
}

fn parse_record(row: &StringRecord, line: u64) -> Result<Record, DataError> {
    let text = |idx: usize| row[idx].to_string();

    Ok(Record {
        age: parse_number(row, 0, line)?,
        workclass: text(1),
        fnlwgt: parse_number(row, 2, line)?,
        education: text(3),
        education_num: parse_number(row, 4, line)?,
        marital_status: text(5),
        occupation: text(6),
        relationship: text(7),
        race: text(8),
        sex: parse_category(row, 9, line)?,
        capital_gain: parse_number(row, 10, line)?,
        capital_loss: parse_number(row, 11, line)?,
        hours_per_week: parse_number(row, 12, line)?,
        native_country: text(13),
        salary: parse_category(row, 14, line)?,
    })
}

fn parse_number<T: FromStr>(row: &StringRecord, idx: usize, line: u64) -> Result<T, DataError> {
    row[idx].parse().map_err(|_| DataError::InvalidNumber {
        line,
        column: COLUMNS[idx],
        value: row[idx].to_string(),
    })
}

fn parse_category<T: FromStr>(row: &StringRecord, idx: usize, line: u64) -> Result<T, DataError> {
    row[idx].parse().map_err(|_| DataError::InvalidCategory {
        line,
        column: COLUMNS[idx],
        value: row[idx].to_string(),
    })
}
