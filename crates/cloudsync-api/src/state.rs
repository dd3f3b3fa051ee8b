//! Application state shared by every request.
//!
//! Both fields are read-only after startup, so no locking is needed.

use cloudsync_core::Config;
use cloudsync_storage::CommandRunner;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub runner: Arc<dyn CommandRunner>,
}

impl AppState {
    pub fn new(config: Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config: Arc::new(config),
            runner,
        }
    }
}
