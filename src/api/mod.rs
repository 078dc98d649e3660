//! HTTP API module for the Daily Wage Engine.
//!
//! This module provides the REST endpoints for evaluating a single
//! partner-day and for triggering the daily batch on demand. The
//! external scheduler is expected to hit `POST /run` once a day.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluateRequest, PartnerRequest, RunRequest, ShiftRequest};
pub use response::ApiError;
pub use state::AppState;
