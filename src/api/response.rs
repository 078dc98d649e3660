//! Response types for the Daily Wage Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration file not found",
                    path,
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", message, path),
            },
            EngineError::InvalidShift { partner_id, message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    format!("Invalid shift for partner '{partner_id}'"),
                    message,
                ),
            },
            EngineError::Store(store_error) => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::new("STORE_ERROR", store_error.to_string()),
            },
            EngineError::LookupTimeout { operation, timeout_ms } => ApiErrorResponse {
                status: StatusCode::GATEWAY_TIMEOUT,
                error: ApiError::new(
                    "LOOKUP_TIMEOUT",
                    format!("{operation} timed out after {timeout_ms}ms"),
                ),
            },
            EngineError::BatchEnumerationFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("BATCH_FAILED", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_invalid_shift_maps_to_unprocessable_entity() {
        let response: ApiErrorResponse = EngineError::InvalidShift {
            partner_id: "partner_001".to_string(),
            message: "end time not after start time".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "INVALID_SHIFT");
    }

    #[test]
    fn test_store_error_maps_to_bad_gateway() {
        let response: ApiErrorResponse = EngineError::Store(StoreError::Unavailable {
            message: "connection refused".to_string(),
        })
        .into();

        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
        assert_eq!(response.error.code, "STORE_ERROR");
    }

    #[test]
    fn test_batch_failure_maps_to_internal_error() {
        let response: ApiErrorResponse = EngineError::BatchEnumerationFailed {
            message: "registry down".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "BATCH_FAILED");
    }

    #[test]
    fn test_api_error_serializes_without_empty_details() {
        let error = ApiError::new("MALFORMED_JSON", "bad body");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("details"));
    }
}
