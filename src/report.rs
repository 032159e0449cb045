//! Error report export.
//!
//! Writes the detail rows of a validation run as CSV (UTF-8, header row,
//! fields quoted only when they contain a delimiter, quote or line break),
//! and reads such a report back.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{ErrorEntry, ErrorReportRow};

/// Default file name for the exported report.
pub const REPORT_FILE_NAME: &str = "payroll_error_report.csv";

/// MIME type of the exported report.
pub const REPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

fn export_error(err: impl std::fmt::Display) -> EngineError {
    EngineError::ExportError {
        message: err.to_string(),
    }
}

/// Writes the error report to any byte sink.
///
/// The header row is always written, even when there are no entries.
///
/// # Example
///
/// ```
/// use payroll_validator::models::{ErrorEntry, ObservedValue, PayrollRecord, Rule};
/// use payroll_validator::report::write_error_report;
///
/// let record = PayrollRecord {
///     row_number: 1,
///     employee_id: Some("7".to_string()),
///     employee_name: Some("Doe, Jane".to_string()),
///     ..Default::default()
/// };
/// let entry = ErrorEntry::for_record(
///     &record,
///     Rule::DuplicateEmployeeIds,
///     ObservedValue::Label("Duplicate Entry".to_string()),
///     "Unique ID",
/// );
///
/// let mut out = Vec::new();
/// write_error_report(&mut out, &[entry]).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Employee ID,Employee Name,Error Type,Value,Expected\n\
///      7,\"Doe, Jane\",Duplicate ID,Duplicate Entry,Unique ID\n"
/// );
/// ```
pub fn write_error_report<W: Write>(writer: W, entries: &[ErrorEntry]) -> EngineResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer
        .write_record(ErrorReportRow::HEADERS)
        .map_err(export_error)?;
    for entry in entries {
        writer
            .serialize(entry.to_report_row())
            .map_err(export_error)?;
    }
    writer.flush().map_err(export_error)?;
    Ok(())
}

/// Renders the error report into memory.
pub fn error_report_bytes(entries: &[ErrorEntry]) -> EngineResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_error_report(&mut buffer, entries)?;
    Ok(buffer)
}

/// Writes the error report to a file, replacing any existing file.
pub fn export_error_report<P: AsRef<Path>>(path: P, entries: &[ErrorEntry]) -> EngineResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| EngineError::ExportError {
        message: format!("cannot create {}: {}", path.display(), e),
    })?;
    write_error_report(file, entries)?;
    info!(path = %path.display(), rows = entries.len(), "Exported error report");
    Ok(())
}

/// Reads an exported error report back into rows.
pub fn read_error_report<R: Read>(reader: R) -> EngineResult<Vec<ErrorReportRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(export_error)?;
    if headers.iter().ne(ErrorReportRow::HEADERS) {
        return Err(EngineError::ExportError {
            message: format!(
                "unexpected report header: {}",
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }

    reader
        .deserialize()
        .collect::<Result<Vec<ErrorReportRow>, _>>()
        .map_err(export_error)
}

/// Reads an exported error report from a file.
pub fn read_error_report_path<P: AsRef<Path>>(path: P) -> EngineResult<Vec<ErrorReportRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| EngineError::ExportError {
        message: format!("cannot open {}: {}", path.display(), e),
    })?;
    read_error_report(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ObservedValue, PayrollRecord, Rule};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn entry(id: Option<&str>, name: Option<&str>, rule: Rule, value: ObservedValue) -> ErrorEntry {
        let record = PayrollRecord {
            row_number: 1,
            employee_id: id.map(str::to_string),
            employee_name: name.map(str::to_string),
            ..Default::default()
        };
        let expected = match rule {
            Rule::DuplicateEmployeeIds => "Unique ID",
            _ => "Positive value",
        };
        ErrorEntry::for_record(&record, rule, value, expected)
    }

    fn sample_entries() -> Vec<ErrorEntry> {
        vec![
            entry(
                Some("2"),
                Some("Bob \"Bobby\" Jones"),
                Rule::NegativeHoursWorked,
                ObservedValue::Number(Decimal::from_str("-5").unwrap()),
            ),
            entry(
                None,
                Some("Smith, Ann"),
                Rule::NegativeNetPay,
                ObservedValue::Currency(Decimal::from_str("-12.5").unwrap()),
            ),
            entry(
                Some("7"),
                None,
                Rule::DuplicateEmployeeIds,
                ObservedValue::Label("Duplicate Entry".to_string()),
            ),
        ]
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let bytes = error_report_bytes(&[]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Employee ID,Employee Name,Error Type,Value,Expected\n"
        );
    }

    #[test]
    fn test_values_with_delimiters_are_quoted() {
        let bytes = error_report_bytes(&sample_entries()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[1],
            "2,\"Bob \"\"Bobby\"\" Jones\",Negative Hours,-5,Positive value"
        );
        assert_eq!(lines[2], "N/A,\"Smith, Ann\",Negative Pay,$-12.50,Positive value");
        assert_eq!(lines[3], "7,N/A,Duplicate ID,Duplicate Entry,Unique ID");
    }

    #[test]
    fn test_report_reads_back_unchanged() {
        let entries = sample_entries();
        let bytes = error_report_bytes(&entries).unwrap();

        let rows = read_error_report(bytes.as_slice()).unwrap();
        let expected: Vec<ErrorReportRow> = entries.iter().map(ErrorEntry::to_report_row).collect();
        assert_eq!(rows, expected);
        assert_eq!(rows[1].rule(), Some(Rule::NegativeNetPay));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REPORT_FILE_NAME);

        export_error_report(&path, &sample_entries()).unwrap();
        let rows = read_error_report_path(&path).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_read_rejects_foreign_header() {
        let input = "Employee ID,Net Pay\n1,100\n";
        assert!(matches!(
            read_error_report(input.as_bytes()),
            Err(EngineError::ExportError { .. })
        ));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let result = export_error_report("/nonexistent/dir/report.csv", &[]);
        assert!(matches!(result, Err(EngineError::ExportError { .. })));
    }
}
