//! Error types module
//!
//! All request-level failures are unified under the `AppError` enum. Each variant
//! describes how it is presented over HTTP through the `ErrorMetadata` trait, so the
//! API crate only has to render what the error reports about itself.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like missing parameters
    Debug,
    /// Warning level - for client mistakes worth noticing
    Warn,
    /// Error level - for failed storage commands
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "COMMAND_FAILED")
    fn error_code(&self) -> &'static str;

    /// Client-facing response body (may be empty)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unknown action: {0:?}")]
    UnknownAction(String),

    #[error("Storage command failed: {0}")]
    CommandFailed(String),
}

/// Response body for missing or empty request parameters.
pub const WRONG_ARGUMENTS: &str = "Wrong arguments";

/// Response body for an action other than `put` or `delete`.
pub const UNKNOWN_ACTION: &str = "Unknown action";

/// Static metadata for each variant: (http_status, error_code, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::BadRequest(_) => (400, "BAD_REQUEST", LogLevel::Debug),
        AppError::UnknownAction(_) => (400, "UNKNOWN_ACTION", LogLevel::Warn),
        AppError::CommandFailed(_) => (500, "COMMAND_FAILED", LogLevel::Error),
    }
}

impl AppError {
    /// Get error type name for logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BadRequest",
            AppError::UnknownAction(_) => "UnknownAction",
            AppError::CommandFailed(_) => "CommandFailed",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::BadRequest(_) => WRONG_ARGUMENTS.to_string(),
            AppError::UnknownAction(_) => UNKNOWN_ACTION.to_string(),
            // Server-side failures never leak command output to the caller.
            AppError::CommandFailed(_) => String::new(),
        }
    }
}
