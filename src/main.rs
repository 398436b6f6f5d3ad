//! HTTP server for the Labor Cost Engine.
//!
//! Environment:
//! - `LABOR_ENGINE_CONFIG`: configuration directory (default `./config/default`)
//! - `LABOR_ENGINE_ADDR`: bind address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use labor_engine::api::{AppState, create_router};
use labor_engine::config::ConfigLoader;
use labor_engine::error::{EngineError, EngineResult};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        error!(error = %err, "labor-engine terminated");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
    {
        eprintln!("failed to initialise tracing: {err}");
    }
}

async fn run() -> EngineResult<()> {
    let config_dir = env::var("LABOR_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let bind_addr = env::var("LABOR_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    let settings = config.settings();
    info!(
        config_dir = %config_dir,
        weekly_threshold_hours = settings.weekly_threshold_hours,
        overtime_multiplier = settings.overtime_multiplier,
        holiday_multiplier = settings.holiday_multiplier,
        week_starts_on = %settings.week_starts_on,
        "Loaded payroll configuration"
    );

    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| EngineError::ServerError {
            message: format!("failed to bind {}: {}", bind_addr, e),
        })?;
    info!(addr = %bind_addr, "Starting labor-engine");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| EngineError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
