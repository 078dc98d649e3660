//! HTTP request handlers for the Daily Wage Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{PartnerProfile, ShiftRecord};

use super::request::{EvaluateRequest, RunRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/run", post(run_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(state)
}

/// Handler for GET /healthz.
async fn healthz_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /evaluate.
///
/// Accepts an optional partner profile, an optional shift record, and
/// the date to evaluate; returns the computed wage result.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "processing evaluate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return reject(correlation_id, rejection).into_response(),
    };

    let partner: Option<PartnerProfile> = request.partner.map(Into::into);
    let shift: Option<ShiftRecord> = request.shift.map(Into::into);

    match state
        .engine()
        .evaluate_day(partner.as_ref(), shift.as_ref(), request.today)
    {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                wage = %result.daily_wage,
                "evaluate request complete"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "evaluate request failed");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

/// Handler for POST /run.
///
/// Triggers one batch run, either for an explicitly supplied date or for
/// the current date. This is the endpoint the external daily scheduler
/// hits; it also serves on-demand replays.
async fn run_handler(
    State(state): State<AppState>,
    payload: Option<Json<RunRequest>>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let date = payload
        .and_then(|Json(req)| req.date)
        .unwrap_or_else(|| Utc::now().date_naive());
    info!(correlation_id = %correlation_id, date = %date, "batch run requested");

    match state.runner().run_for_date(date).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "batch run failed");
            ApiErrorResponse::from(error).into_response()
        }
    }
}

fn reject(correlation_id: Uuid, rejection: JsonRejection) -> (StatusCode, Json<ApiError>) {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error))
}
