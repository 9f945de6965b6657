//! Output retention: bucket expiration and shared link lifetime.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use url::Url;

/// Identifier of the lifecycle rule attached to new output buckets.
pub const EXPIRATION_RULE_ID: &str = "deletion";
/// Whole days, counted from the UTC midnight of creation, before output expires.
pub const RETENTION_DAYS: i64 = 2;
/// Lifetime of the shared output link.
pub const LINK_LIFETIME_HOURS: i64 = 24;

/// Lifecycle rule expiring every object of a bucket at a fixed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpirationRule {
    pub id: String,
    pub expires_at: DateTime<Utc>,
}

impl ExpirationRule {
    /// The rule attached to an output bucket created at `created_at`.
    pub fn for_bucket_created_at(created_at: DateTime<Utc>) -> Self {
        Self { id: EXPIRATION_RULE_ID.to_string(), expires_at: expiration_date(created_at) }
    }
}

/// Midnight UTC of the creation day, plus the retention period.
pub fn expiration_date(created_at: DateTime<Utc>) -> DateTime<Utc> {
    let midnight = created_at.date_naive().and_time(NaiveTime::MIN).and_utc();
    midnight + Duration::days(RETENTION_DAYS)
}

/// Time-limited link granting anonymous read access to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLink {
    pub url: Url,
    pub expires_at: DateTime<Utc>,
}
