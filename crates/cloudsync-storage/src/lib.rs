//! Cloudsync Storage Library
//!
//! This crate turns a notification (action, bucket, object name) into a run of the
//! external storage command-line tool.
//!
//! # Command layout
//!
//! - **put**: `<command> cp <name> <bucket_uri>`
//! - **delete**: `<command> rm <bucket_uri>/<name>`
//!
//! Bucket URIs are derived in the `bucket` module. Running a command goes through the
//! `CommandRunner` trait so callers can substitute the subprocess implementation.

pub mod bucket;
pub mod process;
pub mod traits;
pub mod transfer;

// Re-export commonly used types
pub use bucket::{bucket_uri, object_uri};
pub use cloudsync_core::Action;
pub use process::ProcessRunner;
pub use traits::{CommandRunner, Invocation, StorageError, StorageResult};
pub use transfer::TransferOperation;
