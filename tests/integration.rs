//! Integration tests for the Daily Wage Engine.
//!
//! This test suite drives the HTTP API end to end and covers:
//! - Single-day evaluation scenarios (missing data, on-time, late,
//!   half day, weekday and weekend no-shows)
//! - Anomalous shift records
//! - Malformed request handling
//! - Batch runs: ledger writes, defaults, re-run upsert semantics

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use wage_engine::api::{AppState, create_router};
use wage_engine::batch::BatchOptions;
use wage_engine::config::WageRules;
use wage_engine::store::InMemoryStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state(store: &InMemoryStore) -> AppState {
    AppState::new(
        WageRules::default(),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        BatchOptions::default(),
    )
}

fn router_over(store: &InMemoryStore) -> Router {
    create_router(create_test_state(store))
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn partner_json(joining_day: u32) -> Value {
    json!({
        "id": "partner_001",
        "date_of_joining": format!("2025-03-{joining_day:02}"),
        "scheduled_shift_start": "09:00:00"
    })
}

fn shift_json(start: &str, end: &str) -> Value {
    json!({
        "date": "2026-08-04",
        "actual_start": start,
        "actual_end": end
    })
}

fn no_show_json() -> Value {
    json!({
        "date": "2026-08-04",
        "actual_start": "00:00:00",
        "actual_end": "00:00:00",
        "is_no_show": true
    })
}

fn assert_wage(result: &Value, expected: &str) {
    assert_eq!(
        result["daily_wage"].as_str().unwrap(),
        expected,
        "unexpected daily_wage in {result}"
    );
}

fn assert_deductions(result: &Value, late: &str, early_end: &str, half_day: &str, no_show: &str) {
    let deductions = &result["deductions"];
    assert_eq!(deductions["late"].as_str().unwrap(), late);
    assert_eq!(deductions["early_end"].as_str().unwrap(), early_end);
    assert_eq!(deductions["half_day"].as_str().unwrap(), half_day);
    assert_eq!(deductions["no_show"].as_str().unwrap(), no_show);
}

// =============================================================================
// /evaluate scenarios
// =============================================================================

/// Scenario A: no profile on record.
#[tokio::test]
async fn test_evaluate_missing_profile_pays_full_wage() {
    let store = InMemoryStore::new();
    let body = json!({
        "shift": shift_json("09:00:00", "18:00:00"),
        "today": "2026-08-04"
    });

    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_wage(&result, "500");
    assert_deductions(&result, "0", "0", "0", "0");
}

/// Scenario B: present, on time, full 540-minute shift.
#[tokio::test]
async fn test_evaluate_on_time_full_shift() {
    let store = InMemoryStore::new();
    let body = json!({
        "partner": partner_json(10),
        "shift": shift_json("09:00:00", "18:00:00"),
        "today": "2026-08-04"
    });

    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_wage(&result, "500");
    assert_deductions(&result, "0", "0", "0", "0");
}

/// Scenario C: 30 minutes late, full duration worked.
#[tokio::test]
async fn test_evaluate_late_thirty_minutes() {
    let store = InMemoryStore::new();
    let body = json!({
        "partner": partner_json(10),
        "shift": shift_json("09:30:00", "18:30:00"),
        "today": "2026-08-04"
    });

    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_wage(&result, "440");
    assert_deductions(&result, "60", "0", "0", "0");
}

/// Scenario D: worked 280 minutes, half-day override.
#[tokio::test]
async fn test_evaluate_half_day() {
    let store = InMemoryStore::new();
    let body = json!({
        "partner": partner_json(10),
        "shift": shift_json("09:00:00", "13:40:00"),
        "today": "2026-08-04"
    });

    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_wage(&result, "250");
    assert_deductions(&result, "0", "0", "250", "0");
}

/// Scenario E: no-show on a Tuesday.
#[tokio::test]
async fn test_evaluate_weekday_no_show() {
    let store = InMemoryStore::new();
    let body = json!({
        "partner": partner_json(10),
        "shift": no_show_json(),
        "today": "2026-08-04"
    });

    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_wage(&result, "300");
    assert_deductions(&result, "0", "0", "0", "200");
}

/// Scenario F: no-show on a Saturday, with and without leaves remaining.
#[tokio::test]
async fn test_evaluate_weekend_no_show() {
    let store = InMemoryStore::new();

    // Joined on day 25: no leaves remaining, penalty applies.
    let body = json!({
        "partner": partner_json(25),
        "shift": no_show_json(),
        "today": "2026-08-08"
    });
    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_wage(&result, "300");
    assert_deductions(&result, "0", "0", "0", "200");

    // Joined on day 10: two leaves remaining, no-show excused.
    let body = json!({
        "partner": partner_json(10),
        "shift": no_show_json(),
        "today": "2026-08-08"
    });
    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_wage(&result, "500");
    assert_deductions(&result, "0", "0", "0", "0");
}

#[tokio::test]
async fn test_evaluate_early_departure() {
    let store = InMemoryStore::new();
    // Worked 460 minutes: short by 80, major band.
    let body = json!({
        "partner": partner_json(10),
        "shift": shift_json("09:00:00", "16:40:00"),
        "today": "2026-08-04"
    });

    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_wage(&result, "380");
    assert_deductions(&result, "0", "120", "0", "0");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_evaluate_anomalous_record_is_unprocessable() {
    let store = InMemoryStore::new();
    let body = json!({
        "partner": partner_json(10),
        "shift": shift_json("18:00:00", "09:00:00"),
        "today": "2026-08-04"
    });

    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"].as_str().unwrap(), "INVALID_SHIFT");
}

#[tokio::test]
async fn test_evaluate_missing_today_is_validation_error() {
    let store = InMemoryStore::new();
    let body = json!({ "partner": partner_json(10) });

    let (status, result) = post_json(router_over(&store), "/evaluate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_evaluate_malformed_json_is_bad_request() {
    let store = InMemoryStore::new();
    let response = router_over(&store)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/evaluate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let result: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(result["code"].as_str().unwrap(), "MALFORMED_JSON");
}

// =============================================================================
// Batch runs over /run
// =============================================================================

fn seed_store() -> InMemoryStore {
    let seed = json!({
        "partners": [
            {
                "id": "partner_a",
                "date_of_joining": "2025-03-10",
                "scheduled_shift_start": "09:00:00"
            },
            {
                "id": "partner_b",
                "date_of_joining": "2025-03-25",
                "scheduled_shift_start": "09:00:00"
            },
            {
                "id": "partner_c",
                "date_of_joining": "2025-03-02",
                "scheduled_shift_start": "09:00:00"
            }
        ],
        "attendance": [
            {
                "partner_id": "partner_a",
                "date": "2026-08-04",
                "actual_start": "09:30:00",
                "actual_end": "18:30:00"
            },
            {
                "partner_id": "partner_b",
                "date": "2026-08-04",
                "actual_start": "00:00:00",
                "actual_end": "00:00:00",
                "is_no_show": true
            }
        ]
    });
    InMemoryStore::from_seed(serde_json::from_value(seed).unwrap())
}

#[tokio::test]
async fn test_run_writes_ledger_for_all_partners() {
    let store = seed_store();
    let body = json!({ "date": "2026-08-04" });

    let (status, summary) = post_json(router_over(&store), "/run", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["date"].as_str().unwrap(), "2026-08-04");
    // partner_a and partner_b have records; partner_c has none.
    assert_eq!(summary["processed"].as_u64().unwrap(), 2);
    assert_eq!(summary["defaulted"].as_u64().unwrap(), 1);
    assert_eq!(summary["failed"].as_u64().unwrap(), 0);
    assert_eq!(summary["skipped"].as_u64().unwrap(), 0);

    let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
    let late_entry = store.ledger_entry("partner_a", date).await.unwrap();
    assert_eq!(late_entry.wage.to_string(), "440");
    assert_eq!(late_entry.deductions.late.to_string(), "60");

    let no_show_entry = store.ledger_entry("partner_b", date).await.unwrap();
    assert_eq!(no_show_entry.wage.to_string(), "300");
    assert_eq!(no_show_entry.deductions.no_show.to_string(), "200");

    let defaulted_entry = store.ledger_entry("partner_c", date).await.unwrap();
    assert_eq!(defaulted_entry.wage.to_string(), "500");
    assert!(defaulted_entry.deductions.is_zero());
}

#[tokio::test]
async fn test_rerun_upserts_instead_of_duplicating() {
    let store = seed_store();
    let body = json!({ "date": "2026-08-04" });

    let router = router_over(&store);
    let (status, _) = post_json(router.clone(), "/run", body.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = post_json(router, "/run", body).await;
    assert_eq!(status, StatusCode::OK);

    // Three partners, three entries, no duplicates.
    assert_eq!(store.ledger_len().await, 3);
}

#[tokio::test]
async fn test_healthz() {
    let store = InMemoryStore::new();
    let response = router_over(&store)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
