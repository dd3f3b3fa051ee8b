use crate::traits::{CommandRunner, Invocation, StorageError, StorageResult};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Subprocess command runner
///
/// Spawns the program directly (no shell), waits for it to exit and captures
/// stdout and stderr. There is no timeout: a hung command holds the caller.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        ProcessRunner
    }
}

/// Combine captured streams, stdout first.
fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut output = String::from_utf8_lossy(stdout).into_owned();
    output.push_str(&String::from_utf8_lossy(stderr));
    output
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> StorageResult<()> {
        let start = std::time::Instant::now();

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                tracing::error!(
                    command = %invocation,
                    error = %e,
                    "Failed to spawn storage command"
                );
                StorageError::SpawnFailed {
                    command: invocation.to_string(),
                    source: e,
                }
            })?;

        let duration = start.elapsed();

        if !output.status.success() {
            let combined = combined_output(&output.stdout, &output.stderr);
            tracing::error!(
                command = %invocation,
                status = %output.status,
                output = %combined.trim_end(),
                duration_ms = duration.as_secs_f64() * 1000.0,
                "Storage command failed"
            );
            return Err(StorageError::CommandFailed {
                command: invocation.to_string(),
                status: output.status.to_string(),
                output: combined,
            });
        }

        tracing::debug!(
            command = %invocation,
            duration_ms = duration.as_secs_f64() * 1000.0,
            "Storage command succeeded"
        );

        Ok(())
    }
}
