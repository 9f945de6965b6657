use std::collections::BTreeSet;
use std::sync::Mutex;
use std::time::Duration;

use url::Url;

use crate::domain::{AppError, ExpirationRule};
use crate::ports::ObjectStorage;

/// In-memory bucket store recording every mutating call.
#[derive(Default)]
pub struct FakeObjectStorage {
    buckets: Mutex<BTreeSet<String>>,
    created: Mutex<Vec<String>>,
    rules: Mutex<Vec<(String, ExpirationRule)>>,
    presigned: Mutex<Vec<(String, String, Duration)>>,
}

impl FakeObjectStorage {
    pub fn with_buckets(buckets: &[&str]) -> Self {
        let storage = Self::default();
        storage.buckets.lock().unwrap().extend(buckets.iter().map(|b| b.to_string()));
        storage
    }

    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    pub fn rules(&self) -> Vec<(String, ExpirationRule)> {
        self.rules.lock().unwrap().clone()
    }

    pub fn presigned(&self) -> Vec<(String, String, Duration)> {
        self.presigned.lock().unwrap().clone()
    }
}

impl ObjectStorage for FakeObjectStorage {
    fn bucket_exists(&self, bucket: &str) -> Result<bool, AppError> {
        Ok(self.buckets.lock().unwrap().contains(bucket))
    }

    fn create_bucket(&self, bucket: &str) -> Result<(), AppError> {
        self.buckets.lock().unwrap().insert(bucket.to_string());
        self.created.lock().unwrap().push(bucket.to_string());
        Ok(())
    }

    fn put_expiration_rule(&self, bucket: &str, rule: &ExpirationRule) -> Result<(), AppError> {
        self.rules.lock().unwrap().push((bucket.to_string(), rule.clone()));
        Ok(())
    }

    fn presign_get(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<Url, AppError> {
        self.presigned.lock().unwrap().push((bucket.to_string(), key.to_string(), expires_in));
        Url::parse(&format!(
            "https://storage.test/{}/{}?X-Amz-Expires={}",
            bucket,
            key,
            expires_in.as_secs()
        ))
        .map_err(|e| AppError::cloud_api("PresignGetObject", e.to_string()))
    }
}
