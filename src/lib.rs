//! Labor Cost Engine for field-service crews
//!
//! This crate splits weekly time-clock hours into regular and overtime per
//! worker, and estimates labor cost from hourly rates, an overtime
//! multiplier and a holiday multiplier. An axum API exposes the
//! calculations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
