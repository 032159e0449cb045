//! Payroll Validator
//!
//! This crate validates tabular payroll data against a fixed set of business
//! rules (negative hours worked, negative net pay, duplicate employee IDs)
//! plus optional policy-enabled checks, and produces a summary, a
//! per-record error listing and an exportable CSV error report.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod validation;
