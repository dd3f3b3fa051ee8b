//! Bucket URI derivation.
//!
//! URI format: `gs://{bucket}` without a prefix, `gs://{prefix}-{bucket}` with one.
//! Trailing slashes are always stripped.

use cloudsync_core::constants::BUCKET_SCHEME;

/// Build the normalized bucket URI for `bucket`, applying `prefix` when non-empty.
pub fn bucket_uri(bucket: &str, prefix: &str) -> String {
    let uri = if prefix.is_empty() {
        format!("{}{}", BUCKET_SCHEME, bucket)
    } else {
        format!("{}{}-{}", BUCKET_SCHEME, prefix, bucket)
    };

    uri.trim_end_matches('/').to_string()
}

/// Join a bucket URI and an object name with exactly one `/`.
pub fn object_uri(bucket_uri: &str, name: &str) -> String {
    format!(
        "{}/{}",
        bucket_uri.trim_end_matches('/'),
        name.trim_start_matches('/')
    )
}
