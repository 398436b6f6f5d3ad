//! Response types for the Labor Cost Engine API.
//!
//! This module defines the success envelopes for labor cost estimates and
//! the error response structures for rejected requests.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{LaborCostEstimate, PeriodLaborCost};

/// Rounds a monetary amount to cents for display.
///
/// Returns `None` for `NaN` and infinite amounts, which have no decimal form.
///
/// ```
/// use labor_engine::api::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(1270.004), Some(Decimal::new(127000, 2)));
/// assert_eq!(round_currency(f64::NAN), None);
/// ```
pub fn round_currency(amount: f64) -> Option<Decimal> {
    Decimal::from_f64(amount).map(|d| d.round_dp(2))
}

/// Response body for the `/labor-cost` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCostResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Total cost rounded to cents, or `null` if the total is not a finite number.
    pub total_cost_rounded: Option<Decimal>,
    /// The unrounded estimate.
    pub estimate: LaborCostEstimate,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

impl LaborCostResponse {
    /// Wraps an estimate in a response envelope.
    pub fn new(estimate: LaborCostEstimate, duration_us: u64) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            total_cost_rounded: round_currency(estimate.totals.total_cost),
            estimate,
            duration_us,
        }
    }
}

/// Response body for the `/labor-cost/period` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodLaborCostResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Period total cost rounded to cents, or `null` if not a finite number.
    pub total_cost_rounded: Option<Decimal>,
    /// The unrounded week-by-week estimate.
    pub period: PeriodLaborCost,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}

impl PeriodLaborCostResponse {
    /// Wraps a period estimate in a response envelope.
    pub fn new(period: PeriodLaborCost, duration_us: u64) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            total_cost_rounded: round_currency(period.totals.total_cost),
            period,
            duration_us,
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
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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

impl ApiErrorResponse {
    /// Creates a 400 Bad Request response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LaborCostTotals;
    use std::str::FromStr;

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

    #[tokio::test]
    async fn test_bad_request_response() {
        let response =
            ApiErrorResponse::bad_request(ApiError::validation_error("missing field `entries`"))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(900.0), Some(Decimal::from(900)));
        assert_eq!(
            round_currency(107.025001),
            Some(Decimal::from_str("107.03").unwrap())
        );
        assert_eq!(round_currency(f64::INFINITY), None);
    }

    #[test]
    fn test_response_envelope_rounds_total() {
        let estimate = LaborCostEstimate {
            totals: LaborCostTotals {
                total_cost: 1270.0,
                ..LaborCostTotals::default()
            },
            ..LaborCostEstimate::default()
        };

        let response = LaborCostResponse::new(estimate, 12);
        assert_eq!(response.total_cost_rounded, Some(Decimal::from(1270)));
        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.duration_us, 12);
    }

    #[test]
    fn test_nan_total_serializes_as_null() {
        let estimate = LaborCostEstimate {
            totals: LaborCostTotals {
                total_cost: f64::NAN,
                ..LaborCostTotals::default()
            },
            ..LaborCostEstimate::default()
        };

        let response = LaborCostResponse::new(estimate, 0);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["total_cost_rounded"].is_null());
        assert!(json["estimate"]["totals"]["total_cost"].is_null());
    }
}
