//! HTTP API module for the Labor Cost Engine.
//!
//! This module provides the REST API endpoints for weekly overtime
//! aggregation and labor cost estimates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LaborCostRequest, OvertimeRequest};
pub use response::{
    ApiError, ApiErrorResponse, LaborCostResponse, PeriodLaborCostResponse, round_currency,
};
pub use state::AppState;
