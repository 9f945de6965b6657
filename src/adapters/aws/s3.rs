use std::sync::Arc;
use std::time::Duration;

use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::DateTime;
use aws_sdk_s3::types::{
    BucketLifecycleConfiguration, BucketLocationConstraint, CreateBucketConfiguration,
    ExpirationStatus, LifecycleExpiration, LifecycleRule,
};
use tokio::runtime::Runtime;
use url::Url;

use super::sdk_error;
use crate::domain::{AppError, ExpirationRule};
use crate::ports::ObjectStorage;

/// Region in which buckets are created without a location constraint.
const DEFAULT_REGION: &str = "us-east-1";

/// S3 output buckets and pre-signed links.
pub struct S3ObjectStorage {
    client: Client,
    region: Option<String>,
    runtime: Arc<Runtime>,
}

impl S3ObjectStorage {
    pub fn new(client: Client, region: Option<String>, runtime: Arc<Runtime>) -> Self {
        Self { client, region, runtime }
    }
}

impl ObjectStorage for S3ObjectStorage {
    /// A bucket in another region (301) or owned by another account (403)
    /// counts as existing.
    fn bucket_exists(&self, bucket: &str) -> Result<bool, AppError> {
        match self.runtime.block_on(self.client.head_bucket().bucket(bucket).send()) {
            Ok(_) => Ok(true),
            Err(e) => match e.raw_response().map(|response| response.status().as_u16()) {
                Some(404) => Ok(false),
                Some(301 | 403) => Ok(true),
                _ => Err(sdk_error("HeadBucket", &e)),
            },
        }
    }

    fn create_bucket(&self, bucket: &str) -> Result<(), AppError> {
        let mut request = self.client.create_bucket().bucket(bucket);
        if let Some(region) = self.region.as_deref().filter(|region| *region != DEFAULT_REGION) {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build(),
            );
        }

        self.runtime.block_on(request.send()).map_err(|e| sdk_error("CreateBucket", &e))?;
        Ok(())
    }

    fn put_expiration_rule(&self, bucket: &str, rule: &ExpirationRule) -> Result<(), AppError> {
        let expiration = LifecycleExpiration::builder()
            .date(DateTime::from_secs(rule.expires_at.timestamp()))
            .build();

        #[allow(deprecated)]
        let lifecycle_rule = LifecycleRule::builder()
            .id(&rule.id)
            .status(ExpirationStatus::Enabled)
            .prefix("")
            .expiration(expiration)
            .build()
            .map_err(|e| sdk_error("PutBucketLifecycleConfiguration", &e))?;

        let configuration = BucketLifecycleConfiguration::builder()
            .rules(lifecycle_rule)
            .build()
            .map_err(|e| sdk_error("PutBucketLifecycleConfiguration", &e))?;

        self.runtime
            .block_on(
                self.client
                    .put_bucket_lifecycle_configuration()
                    .bucket(bucket)
                    .lifecycle_configuration(configuration)
                    .send(),
            )
            .map_err(|e| sdk_error("PutBucketLifecycleConfiguration", &e))?;
        Ok(())
    }

    fn presign_get(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<Url, AppError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| sdk_error("PresignGetObject", &e))?;

        let request = self
            .runtime
            .block_on(self.client.get_object().bucket(bucket).key(key).presigned(presigning))
            .map_err(|e| sdk_error("PresignGetObject", &e))?;

        Url::parse(request.uri())
            .map_err(|e| AppError::cloud_api("PresignGetObject", e.to_string()))
    }
}
