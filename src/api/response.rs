//! Response types for the Payroll Validator API.
//!
//! This module defines the validation response body and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{ErrorEntry, PayrollMetrics, ValidationOutcome, Violation};

/// Response body for `POST /validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Identifier of this validation run.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Aggregate metrics.
    pub metrics: PayrollMetrics,
    /// One row per rule that matched.
    pub summary: Vec<Violation>,
    /// One row per (record, rule) match.
    pub details: Vec<ErrorEntry>,
}

impl ValidationResponse {
    /// Wraps an engine outcome with run identity.
    pub fn new(report_id: Uuid, outcome: ValidationOutcome) -> Self {
        Self {
            report_id,
            generated_at: Utc::now(),
            metrics: outcome.metrics,
            summary: outcome.summary,
            details: outcome.details,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates an error for input that could not be loaded.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_INPUT",
            message,
            "The request body must be CSV text with a header row",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InputNotFound { .. } | EngineError::MalformedInput { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::invalid_input(message),
                }
            }
            EngineError::InvalidNumber { column, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_NUMBER",
                    message,
                    format!("Column '{}' must contain numbers only", column),
                ),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::ServerError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("SERVER_ERROR", "Server error", message),
            },
            EngineError::ExportError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Report export failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_malformed_input_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::MalformedInput {
            row: Some(2),
            message: "bad row".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_INPUT");
        assert!(api_error.error.message.contains("row 2"));
    }

    #[test]
    fn test_invalid_number_names_column() {
        let api_error: ApiErrorResponse = EngineError::InvalidNumber {
            row: 1,
            column: "Hours Worked".to_string(),
            value: "ten".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_NUMBER");
        assert!(api_error.error.details.unwrap().contains("Hours Worked"));
    }

    #[test]
    fn test_export_error_is_server_error() {
        let api_error: ApiErrorResponse = EngineError::ExportError {
            message: "write failed".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "EXPORT_ERROR");
    }
}
