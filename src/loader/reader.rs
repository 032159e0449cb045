//! CSV payroll loading.
//!
//! Reads a header row, maps recognized column names onto [`Field`]s, and
//! parses each row into a [`PayrollRecord`]. Columns that are not recognized
//! are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Field, PayrollDataset, PayrollRecord, Schema};

/// Cell contents treated as an empty value.
///
/// Matches the missing-value markers common in spreadsheet exports.
pub const MISSING_MARKERS: [&str; 12] = [
    "", "NA", "N/A", "#N/A", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>",
];

/// Loads payroll datasets from CSV input.
///
/// # Example
///
/// ```
/// use payroll_validator::loader::DatasetLoader;
/// use payroll_validator::models::Field;
///
/// let csv = "Employee ID,Hours Worked,Department\nE001,38,Care\n";
/// let dataset = DatasetLoader::load_str(csv).unwrap();
///
/// assert_eq!(dataset.len(), 1);
/// assert!(dataset.schema.contains(Field::HoursWorked));
/// assert!(!dataset.schema.contains(Field::NetPay));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads a dataset from a CSV file on disk.
    pub fn load_path<P: AsRef<Path>>(path: P) -> EngineResult<PayrollDataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| EngineError::InputNotFound {
            path: path.display().to_string(),
        })?;
        let dataset = Self::load_reader(file)?;
        debug!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded payroll file"
        );
        Ok(dataset)
    }

    /// Loads a dataset from CSV text.
    pub fn load_str(input: &str) -> EngineResult<PayrollDataset> {
        Self::load_reader(input.as_bytes())
    }

    /// Loads a dataset from any CSV byte stream.
    ///
    /// Rows shorter than the header are padded with empty cells. Fails with a
    /// load error on a missing header row, rows longer than the header,
    /// invalid UTF-8, or non-numeric values in a numeric column.
    pub fn load_reader<R: Read>(reader: R) -> EngineResult<PayrollDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(EngineError::MalformedInput {
                row: None,
                message: "input has no header row".to_string(),
            });
        }

        // First occurrence wins when a header is repeated.
        let mut columns: Vec<(usize, Field)> = Vec::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(field) = Field::from_header(header)
                && !columns.iter().any(|(_, f)| *f == field)
            {
                columns.push((index, field));
            }
        }
        let schema = Schema::new(columns.iter().map(|(_, f)| *f));

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            let row_number = index + 1;
            if row.len() > headers.len() {
                return Err(EngineError::MalformedInput {
                    row: Some(row_number),
                    message: format!(
                        "found record with {} fields, but the header has {} fields",
                        row.len(),
                        headers.len()
                    ),
                });
            }
            let mut record = PayrollRecord {
                row_number,
                ..Default::default()
            };

            for (column, field) in &columns {
                let cell = row.get(*column).unwrap_or("");
                if field.is_numeric() {
                    let value =
                        parse_decimal(cell).ok_or_else(|| EngineError::InvalidNumber {
                            row: row_number,
                            column: field.header().to_string(),
                            value: cell.to_string(),
                        })?;
                    record.set_decimal(*field, value);
                } else {
                    record.set_text(*field, parse_text(cell));
                }
            }

            records.push(record);
        }

        debug!(
            records = records.len(),
            missing_columns = ?schema.missing(),
            "Parsed payroll input"
        );

        Ok(PayrollDataset::new(schema, records))
    }
}

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell)
}

/// Returns the trimmed text, or `None` for an empty cell.
fn parse_text(cell: &str) -> Option<String> {
    let cell = cell.trim();
    if is_missing(cell) {
        None
    } else {
        Some(cell.to_string())
    }
}

/// Parses a numeric cell.
///
/// The outer `Option` is `None` when the cell is not a number; the inner one
/// is `None` for an empty cell.
fn parse_decimal(cell: &str) -> Option<Option<Decimal>> {
    let cell = cell.trim();
    if is_missing(cell) {
        return Some(None);
    }
    // Digit separators are not numbers in payroll exports.
    if cell.contains('_') {
        return None;
    }

    Decimal::from_str(cell)
        .or_else(|_| Decimal::from_scientific(cell))
        .ok()
        .map(Some)
}
