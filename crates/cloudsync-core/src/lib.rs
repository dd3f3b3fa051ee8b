//! Cloudsync Core Library
//!
//! This crate provides the configuration model, the transfer action type, and the
//! error types shared by the storage and API crates.

pub mod action;
pub mod config;
pub mod constants;
pub mod error;

// Re-export commonly used types
pub use action::Action;
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
