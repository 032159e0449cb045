//! Payroll record model and related types.
//!
//! This module defines the [`PayrollRecord`] row type, the [`Field`] enum of
//! recognized columns, the [`Schema`] of columns present in an input, and the
//! [`PayrollDataset`] that ties them together.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recognized payroll column.
///
/// Variants are declared in the canonical column order of a payroll file.
///
/// # Example
///
/// ```
/// use payroll_validator::models::Field;
///
/// assert_eq!(Field::NetPay.header(), "Net Pay");
/// assert_eq!(Field::from_header(" Hours Worked "), Some(Field::HoursWorked));
/// assert_eq!(Field::from_header("Department"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Employee identifier.
    #[serde(rename = "Employee ID")]
    EmployeeId,
    /// Employee display name.
    #[serde(rename = "Employee Name")]
    EmployeeName,
    /// Hours worked in the pay period.
    #[serde(rename = "Hours Worked")]
    HoursWorked,
    /// Pay rate per hour.
    #[serde(rename = "Hourly Rate")]
    HourlyRate,
    /// Total pay before deductions.
    #[serde(rename = "Gross Pay")]
    GrossPay,
    /// Tax deductions.
    #[serde(rename = "Tax")]
    Tax,
    /// Final pay after deductions.
    #[serde(rename = "Net Pay")]
    NetPay,
}

impl Field {
    /// All recognized fields in canonical column order.
    pub const ALL: [Field; 7] = [
        Field::EmployeeId,
        Field::EmployeeName,
        Field::HoursWorked,
        Field::HourlyRate,
        Field::GrossPay,
        Field::Tax,
        Field::NetPay,
    ];

    /// Returns the column header used for this field in payroll files.
    pub fn header(self) -> &'static str {
        match self {
            Field::EmployeeId => "Employee ID",
            Field::EmployeeName => "Employee Name",
            Field::HoursWorked => "Hours Worked",
            Field::HourlyRate => "Hourly Rate",
            Field::GrossPay => "Gross Pay",
            Field::Tax => "Tax",
            Field::NetPay => "Net Pay",
        }
    }

    /// Looks up a field by column header, ignoring surrounding whitespace.
    pub fn from_header(header: &str) -> Option<Field> {
        let header = header.trim();
        Field::ALL.into_iter().find(|f| f.header() == header)
    }

    /// Returns true if the column holds decimal numbers.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::EmployeeId | Field::EmployeeName)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.header())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_header(s).ok_or_else(|| format!("Unknown payroll field: {}", s))
    }
}

/// The set of recognized columns present in an input.
///
/// Rules check the schema before running; a rule whose columns are missing
/// is skipped rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: BTreeSet<Field>,
}

impl Schema {
    /// Creates a schema from the given fields.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Creates a schema containing every recognized field.
    pub fn full() -> Self {
        Self::new(Field::ALL)
    }

    /// Returns true if the column is present.
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Returns true if every one of the given columns is present.
    pub fn contains_all(&self, fields: &[Field]) -> bool {
        fields.iter().all(|f| self.contains(*f))
    }

    /// Returns the present fields in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    /// Returns the recognized fields missing from this schema.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.contains(*f))
            .collect()
    }
}

/// One employee's payroll row.
///
/// Every field is optional: a column may be absent from the input, or a
/// cell may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// 1-based data row in the input (header excluded).
    pub row_number: usize,
    /// Employee identifier. Not guaranteed unique.
    pub employee_id: Option<String>,
    /// Employee display name.
    pub employee_name: Option<String>,
    /// Hours worked in the pay period.
    pub hours_worked: Option<Decimal>,
    /// Pay rate per hour.
    pub hourly_rate: Option<Decimal>,
    /// Total pay before deductions.
    pub gross_pay: Option<Decimal>,
    /// Tax deductions.
    pub tax: Option<Decimal>,
    /// Final pay after deductions.
    pub net_pay: Option<Decimal>,
}

impl PayrollRecord {
    /// Returns true if the record carries a value for the given field.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_validator::models::{Field, PayrollRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let record = PayrollRecord {
    ///     row_number: 1,
    ///     employee_id: Some("E001".to_string()),
    ///     net_pay: Some(Decimal::new(100000, 2)),
    ///     ..Default::default()
    /// };
    /// assert!(record.has_value(Field::EmployeeId));
    /// assert!(!record.has_value(Field::HoursWorked));
    /// ```
    pub fn has_value(&self, field: Field) -> bool {
        match field {
            Field::EmployeeId => self.employee_id.is_some(),
            Field::EmployeeName => self.employee_name.is_some(),
            Field::HoursWorked => self.hours_worked.is_some(),
            Field::HourlyRate => self.hourly_rate.is_some(),
            Field::GrossPay => self.gross_pay.is_some(),
            Field::Tax => self.tax.is_some(),
            Field::NetPay => self.net_pay.is_some(),
        }
    }

    /// Returns the value of a numeric field, or `None` for text fields.
    pub fn decimal(&self, field: Field) -> Option<Decimal> {
        match field {
            Field::HoursWorked => self.hours_worked,
            Field::HourlyRate => self.hourly_rate,
            Field::GrossPay => self.gross_pay,
            Field::Tax => self.tax,
            Field::NetPay => self.net_pay,
            Field::EmployeeId | Field::EmployeeName => None,
        }
    }

    /// Sets a text field. Numeric fields are left untouched.
    pub fn set_text(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::EmployeeId => self.employee_id = value,
            Field::EmployeeName => self.employee_name = value,
            _ => {}
        }
    }

    /// Sets a numeric field. Text fields are left untouched.
    pub fn set_decimal(&mut self, field: Field, value: Option<Decimal>) {
        match field {
            Field::HoursWorked => self.hours_worked = value,
            Field::HourlyRate => self.hourly_rate = value,
            Field::GrossPay => self.gross_pay = value,
            Field::Tax => self.tax = value,
            Field::NetPay => self.net_pay = value,
            Field::EmployeeId | Field::EmployeeName => {}
        }
    }
}

/// An ordered set of payroll records together with the columns they came from.
///
/// Record order is input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollDataset {
    /// The columns present in the input.
    pub schema: Schema,
    /// The records, in input order.
    pub records: Vec<PayrollRecord>,
}

impl PayrollDataset {
    /// Creates a dataset from a schema and records.
    pub fn new(schema: Schema, records: Vec<PayrollRecord>) -> Self {
        Self { schema, records }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
