//! Record loading for the Payroll Validator.
//!
//! Turns tabular input into a [`PayrollDataset`](crate::models::PayrollDataset).
//! Any failure here is fatal to the run; the engine never sees partial data.

mod reader;

pub use reader::{DatasetLoader, MISSING_MARKERS};
