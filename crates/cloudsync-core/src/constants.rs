//! Shared constants

/// Default path of the JSON configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "cloudsync.json";

/// URI scheme of Google Cloud Storage buckets.
pub const BUCKET_SCHEME: &str = "gs://";

/// Environment variables that override values from the configuration file.
pub const ENV_PORT: &str = "CLOUDSYNC_PORT";
pub const ENV_GSUTIL_COMMAND: &str = "CLOUDSYNC_GSUTIL_COMMAND";
pub const ENV_BUCKET_PREFIX: &str = "CLOUDSYNC_BUCKET_PREFIX";
