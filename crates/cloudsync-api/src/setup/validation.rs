//! Configuration validation
//!
//! Validates configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use cloudsync_core::Config;
use std::path::Path;

/// Validate configuration values
///
/// Errors abort startup. A missing absolute command path only warns, since the
/// binary may be installed after the service starts.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    let command = Path::new(config.gsutil_command());
    if command.is_absolute() && !command.exists() {
        tracing::warn!(
            gsutil_command = %config.gsutil_command(),
            "GSUtilCommand does not exist - every transfer will fail until it is installed"
        );
    }

    if config.server_port() == 0 {
        tracing::warn!("Port is 0 - the server will listen on an ephemeral port");
    }

    Ok(())
}
