//! Cloudsync API Library
//!
//! This crate provides the HTTP notification handler, error rendering, and
//! application setup for the `cloudsync` binary.

pub mod cli;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;
