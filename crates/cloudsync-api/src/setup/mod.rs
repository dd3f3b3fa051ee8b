//! Application setup and initialization
//!
//! Kept out of main.rs so tests can build the same router with a substitute runner.

pub mod routes;
pub mod server;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use cloudsync_core::Config;
use cloudsync_storage::{CommandRunner, ProcessRunner};
use std::sync::Arc;

/// Initialize the application with the subprocess command runner
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    initialize_app_with_runner(config, Arc::new(ProcessRunner::new()))
}

/// Initialize the application with an explicit command runner
pub fn initialize_app_with_runner(
    config: Config,
    runner: Arc<dyn CommandRunner>,
) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    tracing::info!(
        gsutil_command = %config.gsutil_command(),
        bucket_prefix = %config.bucket_prefix(),
        "Configuration loaded and validated successfully"
    );

    let state = Arc::new(AppState::new(config, runner));
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
