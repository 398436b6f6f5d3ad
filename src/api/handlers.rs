//! HTTP request handlers for the Labor Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_weekly_overtime, aggregate_weekly_overtime_with_breakdown,
    calculate_labor_cost_estimate, calculate_period_labor_cost,
};

use super::request::{LaborCostRequest, OvertimeRequest};
use super::response::{ApiError, ApiErrorResponse, LaborCostResponse, PeriodLaborCostResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/overtime", post(overtime_handler))
        .route("/overtime/breakdown", post(overtime_breakdown_handler))
        .route("/labor-cost", post(labor_cost_handler))
        .route("/labor-cost/period", post(period_labor_cost_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        serde_json::json!({
            "status": "ok",
            "engine_version": env!("CARGO_PKG_VERSION")
        }),
    )
}

/// Handler for POST /overtime.
///
/// Returns the aggregate regular/overtime split for one week of entries.
async fn overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let threshold = request.threshold(state.config().settings());
    let start_time = Instant::now();
    let totals = aggregate_weekly_overtime(&request.entries, threshold);

    info!(
        correlation_id = %correlation_id,
        entries = request.entries.len(),
        threshold,
        total_hours = totals.total_hours,
        duration_us = start_time.elapsed().as_micros(),
        "Overtime aggregation completed"
    );

    json_response(StatusCode::OK, totals)
}

/// Handler for POST /overtime/breakdown.
///
/// Returns the aggregate split together with each worker's figures.
async fn overtime_breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime breakdown request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let threshold = request.threshold(state.config().settings());
    let start_time = Instant::now();
    let breakdown = aggregate_weekly_overtime_with_breakdown(&request.entries, threshold);

    info!(
        correlation_id = %correlation_id,
        entries = request.entries.len(),
        workers = breakdown.by_worker.len(),
        threshold,
        total_hours = breakdown.totals.total_hours,
        duration_us = start_time.elapsed().as_micros(),
        "Overtime breakdown completed"
    );

    json_response(StatusCode::OK, breakdown)
}

/// Handler for POST /labor-cost.
///
/// Treats every entry as belonging to one payroll week.
async fn labor_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<LaborCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing labor cost request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let settings = request.settings(state.config().settings());
    let entries = request.into_rated_entries(settings.default_hourly_rate);

    let start_time = Instant::now();
    let estimate = calculate_labor_cost_estimate(&entries, &settings, 1);
    let duration_us = start_time.elapsed().as_micros() as u64;

    if !estimate.audit_trace.warnings.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            warnings = estimate.audit_trace.warnings.len(),
            "Labor cost estimate produced warnings"
        );
    }

    let response = LaborCostResponse::new(estimate, duration_us);
    info!(
        correlation_id = %correlation_id,
        calculation_id = %response.calculation_id,
        workers = response.estimate.workers.len(),
        total_cost = response.estimate.totals.total_cost,
        duration_us,
        "Labor cost estimate completed"
    );

    json_response(StatusCode::OK, response)
}

/// Handler for POST /labor-cost/period.
///
/// Splits entries into payroll weeks before estimating.
async fn period_labor_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<LaborCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period labor cost request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let settings = request.settings(state.config().settings());
    let entries = request.into_rated_entries(settings.default_hourly_rate);

    let start_time = Instant::now();
    let period = calculate_period_labor_cost(&entries, &settings);
    let duration_us = start_time.elapsed().as_micros() as u64;

    let response = PeriodLaborCostResponse::new(period, duration_us);
    info!(
        correlation_id = %correlation_id,
        calculation_id = %response.calculation_id,
        weeks = response.period.weeks.len(),
        total_cost = response.period.totals.total_cost,
        duration_us,
        "Period labor cost estimate completed"
    );

    json_response(StatusCode::OK, response)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        other => ApiError::with_details(
            "MALFORMED_JSON",
            "Failed to parse request body",
            other.body_text(),
        ),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, PayrollSettings};
    use crate::models::{OvertimeBreakdown, OvertimeTotals};
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response.headers().get("content-type").unwrap().clone();
        assert_eq!(content_type, "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_overtime_returns_totals() {
        let router = create_router(create_test_state());
        let body = json!({
            "entries": [
                {"personnel_id": "A", "hours": 50},
                {"personnel_id": "B", "hours": 20}
            ]
        });

        let (status, bytes) = post_json(router, "/overtime", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let totals: OvertimeTotals = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(totals, OvertimeTotals::from_parts(60.0, 10.0));
    }

    #[tokio::test]
    async fn test_overtime_threshold_override() {
        let router = create_router(create_test_state());
        let body = json!({
            "entries": [{"personnel_id": "A", "hours": 40}],
            "weekly_threshold": 38
        });

        let (_, bytes) = post_json(router, "/overtime", body.to_string()).await;
        let totals: OvertimeTotals = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(totals.regular_hours, 38.0);
        assert_eq!(totals.overtime_hours, 2.0);
    }

    #[tokio::test]
    async fn test_overtime_breakdown_returns_workers() {
        let router = create_router(create_test_state());
        let body = json!({
            "entries": [
                {"personnel_id": null, "user_id": "u1", "hours": 25},
                {"personnel_id": null, "user_id": "u1", "hours": 25},
                {"personnel_id": null, "user_id": "u2", "hours": 25}
            ]
        });

        let (status, bytes) = post_json(router, "/overtime/breakdown", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let breakdown: OvertimeBreakdown = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(breakdown.by_worker.len(), 2);
        assert_eq!(breakdown.by_worker["u1"].overtime_hours, 10.0);
        assert_eq!(breakdown.totals.total_hours, 75.0);
    }

    #[tokio::test]
    async fn test_labor_cost_end_to_end() {
        let router = create_router(create_test_state());
        let body = json!({
            "entries": [
                {"personnel_id": "A", "hours": 45, "is_holiday": false, "hourly_rate": 20},
                {"personnel_id": "A", "hours": 8, "is_holiday": true, "hourly_rate": 20}
            ]
        });

        let (status, bytes) = post_json(router, "/labor-cost", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let response: LaborCostResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(response.estimate.totals.total_cost, 1270.0);
        assert_eq!(response.total_cost_rounded, Some(Decimal::from(1270)));
        assert_eq!(response.estimate.audit_trace.steps.len(), 1);
    }

    #[tokio::test]
    async fn test_labor_cost_uses_worker_rates() {
        let router = create_router(create_test_state());
        let body = json!({
            "entries": [{"user_id": "u1", "hours": 10}],
            "worker_rates": {"u1": 30}
        });

        let (_, bytes) = post_json(router, "/labor-cost", body.to_string()).await;
        let response: LaborCostResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(response.estimate.workers[0].hourly_rate, 30.0);
        assert_eq!(response.estimate.totals.total_cost, 300.0);
        assert!(response.estimate.audit_trace.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_labor_cost_uses_configured_default_rate() {
        let settings = PayrollSettings {
            default_hourly_rate: Some(15.0),
            ..PayrollSettings::default()
        };
        let state = AppState::new(ConfigLoader::from_settings(settings).unwrap());
        let router = create_router(state);
        let body = json!({"entries": [{"personnel_id": "A", "hours": 10}]});

        let (_, bytes) = post_json(router, "/labor-cost", body.to_string()).await;
        let response: LaborCostResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(response.estimate.totals.total_cost, 150.0);
    }

    #[tokio::test]
    async fn test_period_labor_cost_splits_weeks() {
        let router = create_router(create_test_state());
        let body = json!({
            "entries": [
                {"personnel_id": "A", "hours": 45, "hourly_rate": 20, "work_date": "2026-01-13"},
                {"personnel_id": "A", "hours": 35, "hourly_rate": 20, "work_date": "2026-01-20"}
            ]
        });

        let (status, bytes) = post_json(router, "/labor-cost/period", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let response: PeriodLaborCostResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(response.period.weeks.len(), 2);
        assert_eq!(response.period.totals.total_cost, 1650.0);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, bytes) = post_json(router, "/overtime", "{invalid json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_entries_returns_validation_error() {
        let router = create_router(create_test_state());

        let (status, bytes) =
            post_json(router, "/labor-cost", r#"{"worker_rates": {}}"#.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("entries"));
    }

    #[tokio::test]
    async fn test_negative_hours_are_accepted() {
        let router = create_router(create_test_state());
        let body = json!({"entries": [{"personnel_id": "A", "hours": -3}]});

        let (status, bytes) = post_json(router, "/overtime", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let totals: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(totals["regular_hours"], -3.0);
    }

    #[tokio::test]
    async fn test_health() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
