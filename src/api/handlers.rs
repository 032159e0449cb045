//! HTTP request handlers for the Payroll Validator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::loader::DatasetLoader;
use crate::models::ValidationOutcome;
use crate::report::{REPORT_CONTENT_TYPE, REPORT_FILE_NAME, error_report_bytes};

use super::response::{ApiErrorResponse, ValidationResponse};
use super::state::AppState;

/// `Content-Disposition` value naming the exported report.
fn report_disposition() -> String {
    format!("attachment; filename=\"{}\"", REPORT_FILE_NAME)
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/validate", post(validate_handler))
        .route("/validate/export", post(export_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /validate.
///
/// Accepts a CSV payroll file as the request body and returns the metrics,
/// summary and detail rows as JSON.
async fn validate_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let report_id = Uuid::new_v4();
    info!(report_id = %report_id, bytes = body.len(), "Processing validation request");

    let start_time = Instant::now();
    match run_validation(&state, &body) {
        Ok(outcome) => {
            info!(
                report_id = %report_id,
                records = outcome.metrics.total_employees,
                errors_found = outcome.metrics.errors_found,
                duration_us = start_time.elapsed().as_micros(),
                "Validation request completed"
            );
            (
                StatusCode::OK,
                Json(ValidationResponse::new(report_id, outcome)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(report_id = %report_id, error = %err, "Validation request rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /validate/export.
///
/// Accepts a CSV payroll file and returns the error report as a CSV
/// attachment.
async fn export_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let report_id = Uuid::new_v4();
    info!(report_id = %report_id, bytes = body.len(), "Processing export request");

    let report = run_validation(&state, &body)
        .and_then(|outcome| error_report_bytes(&outcome.details).map(|b| (outcome, b)));

    match report {
        Ok((outcome, bytes)) => {
            info!(
                report_id = %report_id,
                rows = outcome.details.len(),
                "Export request completed"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, REPORT_CONTENT_TYPE.to_string()),
                    (header::CONTENT_DISPOSITION, report_disposition()),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(report_id = %report_id, error = %err, "Export request rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Loads the request body and validates it.
fn run_validation(state: &AppState, body: &[u8]) -> EngineResult<ValidationOutcome> {
    let dataset = DatasetLoader::load_reader(body)?;
    Ok(state.engine().validate(&dataset))
}
