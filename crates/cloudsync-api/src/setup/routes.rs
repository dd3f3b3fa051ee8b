//! Route configuration and setup.

use crate::handlers::{health, notify};
use crate::state::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Setup all application routes
///
/// The notification handler answers on `/` and on every path without its own route.
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    Router::new()
        .route("/health", get(health::liveness_check))
        .route("/", any(notify::notify))
        .fallback(notify::notify)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
