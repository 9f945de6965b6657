//! Object storage port definition.

use std::time::Duration;

use url::Url;

use crate::domain::{AppError, ExpirationRule};

/// Port for output bucket operations.
pub trait ObjectStorage {
    /// Whether a bucket named `bucket` exists.
    fn bucket_exists(&self, bucket: &str) -> Result<bool, AppError>;

    fn create_bucket(&self, bucket: &str) -> Result<(), AppError>;

    /// Replace the lifecycle configuration of `bucket` with `rule`.
    fn put_expiration_rule(&self, bucket: &str, rule: &ExpirationRule) -> Result<(), AppError>;

    /// Pre-sign an anonymous GET of `bucket`/`key` valid for `expires_in`.
    fn presign_get(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<Url, AppError>;
}
