//! Transfer operation
//!
//! A `TransferOperation` is built once per notification and run exactly once. It owns
//! everything needed to derive the bucket URI and the storage command line; running it
//! is delegated to a `CommandRunner`.

use crate::bucket::{bucket_uri, object_uri};
use crate::traits::{CommandRunner, Invocation, StorageResult};
use cloudsync_core::{Action, Config};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOperation {
    action: Action,
    bucket: String,
    name: String,
    bucket_prefix: String,
    command_path: String,
}

impl TransferOperation {
    pub fn new(
        command_path: impl Into<String>,
        bucket_prefix: impl Into<String>,
        action: Action,
        bucket: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            action,
            bucket: bucket.into(),
            name: name.into(),
            bucket_prefix: bucket_prefix.into(),
            command_path: command_path.into(),
        }
    }

    /// Build an operation using the command path and bucket prefix from `config`.
    pub fn from_config(
        config: &Config,
        action: Action,
        bucket: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(
            config.gsutil_command(),
            config.bucket_prefix(),
            action,
            bucket,
            name,
        )
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized bucket URI, derived on every call.
    pub fn bucket_uri(&self) -> String {
        bucket_uri(&self.bucket, &self.bucket_prefix)
    }

    fn put_invocation(&self) -> Invocation {
        Invocation::new(
            self.command_path.as_str(),
            ["cp".to_string(), self.name.clone(), self.bucket_uri()],
        )
    }

    fn delete_invocation(&self) -> Invocation {
        let target = object_uri(&self.bucket_uri(), &self.name);
        Invocation::new(self.command_path.as_str(), ["rm".to_string(), target])
    }

    /// The command line `execute` runs for this operation's action.
    pub fn invocation(&self) -> Invocation {
        match self.action {
            Action::Put => self.put_invocation(),
            Action::Delete => self.delete_invocation(),
        }
    }

    /// Copy the local object into the bucket.
    pub async fn put(&self, runner: &dyn CommandRunner) -> StorageResult<()> {
        runner.run(&self.put_invocation()).await
    }

    /// Remove the object from the bucket.
    pub async fn delete(&self, runner: &dyn CommandRunner) -> StorageResult<()> {
        runner.run(&self.delete_invocation()).await
    }

    pub async fn execute(&self, runner: &dyn CommandRunner) -> StorageResult<()> {
        tracing::info!(
            action = %self.action,
            bucket_uri = %self.bucket_uri(),
            name = %self.name,
            "Executing transfer"
        );

        match self.action {
            Action::Put => self.put(runner).await,
            Action::Delete => self.delete(runner).await,
        }
    }
}
