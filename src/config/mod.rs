//! Configuration loading and management for the Labor Cost Engine.
//!
//! This module loads the payroll settings (weekly threshold, overtime and
//! holiday multipliers, payroll week start) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use labor_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Overtime after {} hours", config.settings().weekly_threshold_hours);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SETTINGS_FILE};
pub use types::PayrollSettings;
