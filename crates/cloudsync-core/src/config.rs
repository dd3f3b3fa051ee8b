//! Configuration module
//!
//! Configuration is read once at startup from a JSON file, then selected values can be
//! overridden from the environment (a `.env` file is honoured). The resulting value is
//! immutable and shared read-only with every request.
//!
//! File format:
//!
//! ```json
//! { "Port": 8080, "GSUtilCommand": "/usr/bin/gsutil", "BucketPrefix": "prod" }
//! ```

use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::constants::{ENV_BUCKET_PREFIX, ENV_GSUTIL_COMMAND, ENV_PORT};

/// Application configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// TCP port the HTTP server listens on
    #[serde(rename = "Port", alias = "port")]
    pub port: u16,
    /// Path to the storage command-line tool
    #[serde(rename = "GSUtilCommand", alias = "gsutil_command")]
    pub gsutil_command: String,
    /// Prepended to every bucket name as `{prefix}-{bucket}`; empty disables it
    #[serde(rename = "BucketPrefix", alias = "bucket_prefix", default)]
    pub bucket_prefix: String,
}

impl Config {
    /// Load configuration from `path` and apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Self::from_file(path)?.with_overrides(|key| env::var(key).ok())?;
        tracing::debug!(
            port = config.port,
            gsutil_command = %config.gsutil_command,
            bucket_prefix = %config.bucket_prefix,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Read and decode the JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Cannot read configuration file {}", path.display()))?;

        Self::from_json(&raw)
            .with_context(|| format!("Cannot decode configuration file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self, anyhow::Error> {
        let config: Config = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// Apply overrides looked up by variable name.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map instead of
    /// mutating the process environment.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("{} could not be parsed into a u16", ENV_PORT))?;
        }

        if let Some(command) = lookup(ENV_GSUTIL_COMMAND) {
            self.gsutil_command = command;
        }

        if let Some(prefix) = lookup(ENV_BUCKET_PREFIX) {
            self.bucket_prefix = prefix;
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.gsutil_command.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "GSUtilCommand cannot be empty - set it in the configuration file or via {}",
                ENV_GSUTIL_COMMAND
            ));
        }

        Ok(())
    }

    pub fn server_port(&self) -> u16 {
        self.port
    }

    pub fn gsutil_command(&self) -> &str {
        &self.gsutil_command
    }

    pub fn bucket_prefix(&self) -> &str {
        &self.bucket_prefix
    }
}
