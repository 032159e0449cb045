//! HTTP API module for the Payroll Validator.
//!
//! This module exposes the validation engine over HTTP: a CSV payroll file
//! is posted as the request body and the report comes back as JSON or as a
//! CSV attachment.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse, ValidationResponse};
pub use state::AppState;
