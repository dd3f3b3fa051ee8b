//! Storage notification handler.
//!
//! `?action={put|delete}&bucket=...&filename=...` on any path and method. When a key is
//! repeated only its first value is used. Keys and values must percent-decode to valid
//! UTF-8; anything else is rejected rather than passed on with replacement characters.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::extract::{RawQuery, State};
use cloudsync_core::{Action, AppError};
use cloudsync_storage::TransferOperation;
use percent_encoding::percent_decode_str;
use std::sync::Arc;

/// Decode one form-encoded key or value (`+` is a space).
fn form_decode(raw: &str) -> Result<String, AppError> {
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| AppError::BadRequest(format!("query is not valid UTF-8: {}", e)))
}

/// Split a raw query string into decoded pairs, keeping their order.
fn parse_query(raw: Option<&str>) -> Result<Vec<(String, String)>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<(String, String), AppError> {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((form_decode(key)?, form_decode(value)?))
        })
        .collect()
}

/// First value of `key`, or `None` when absent or empty.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, PartialEq, Eq)]
struct NotifyParams {
    action: String,
    bucket: String,
    filename: String,
}

impl NotifyParams {
    fn from_pairs(pairs: &[(String, String)]) -> Result<Self, AppError> {
        match (
            first_value(pairs, "action"),
            // A bucket made only of slashes would leave `gs:` after trimming.
            first_value(pairs, "bucket").filter(|b| !b.trim_end_matches('/').is_empty()),
            first_value(pairs, "filename"),
        ) {
            (Some(action), Some(bucket), Some(filename)) => Ok(Self {
                action,
                bucket,
                filename,
            }),
            _ => Err(AppError::BadRequest(
                "action, bucket and filename are required".to_string(),
            )),
        }
    }
}

#[tracing::instrument(skip(state, query), fields(operation = "notify"))]
pub async fn notify(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<&'static str, HttpAppError> {
    let pairs = parse_query(query.as_deref()).inspect_err(|e| {
        tracing::warn!(error = %e, "Query string could not be decoded");
    })?;

    let params = NotifyParams::from_pairs(&pairs)?;
    let action: Action = params.action.parse()?;

    let operation =
        TransferOperation::from_config(&state.config, action, params.bucket, params.filename);
    operation.execute(state.runner.as_ref()).await?;

    tracing::info!(
        action = %operation.action(),
        bucket_uri = %operation.bucket_uri(),
        name = %operation.name(),
        "OK"
    );

    Ok("OK")
}
