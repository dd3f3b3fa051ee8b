//! Test helpers: build the router around a recording command runner.
//!
//! Run from workspace root: `cargo test -p cloudsync-api --test notify_test`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use cloudsync_api::setup::initialize_app_with_runner;
use cloudsync_core::Config;
use cloudsync_storage::{CommandRunner, Invocation, StorageError, StorageResult};
use std::sync::{Arc, Mutex};

pub const TEST_COMMAND: &str = "/usr/local/bin/gsutil";

/// Records every invocation instead of spawning a process.
pub struct RecordingRunner {
    calls: Mutex<Vec<Invocation>>,
    fail: bool,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().expect("runner lock poisoned").clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> StorageResult<()> {
        self.calls
            .lock()
            .expect("runner lock poisoned")
            .push(invocation.clone());

        if self.fail {
            return Err(StorageError::CommandFailed {
                command: invocation.to_string(),
                status: "exit status: 1".to_string(),
                output: "CommandException: No URLs matched".to_string(),
            });
        }

        Ok(())
    }
}

/// Test application: server plus the runner it records into.
pub struct TestApp {
    pub server: TestServer,
    pub runner: Arc<RecordingRunner>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.runner.calls()
    }
}

pub fn test_config(bucket_prefix: &str) -> Config {
    Config {
        port: 0,
        gsutil_command: TEST_COMMAND.to_string(),
        bucket_prefix: bucket_prefix.to_string(),
    }
}

pub fn setup_test_app_with(config: Config, runner: RecordingRunner) -> TestApp {
    let runner = Arc::new(runner);
    let (_state, app) = initialize_app_with_runner(config, runner.clone())
        .expect("Failed to initialize app");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp { server, runner }
}

/// Setup test app without bucket prefix and a runner that always succeeds.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(test_config(""), RecordingRunner::succeeding())
}
