use crate::IdentityRecord;

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// Maximum accepted age of a record's `auth_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    ttl: Duration,
}

impl ExpiryPolicy {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn is_expired(&self, record: &IdentityRecord) -> bool {
        self.is_expired_at(record, Utc::now())
    }

    /// Expired when strictly more than `ttl` has elapsed since `auth_date`.
    ///
    /// Elapsed time is counted in whole seconds, the resolution of
    /// `auth_date`. An `auth_date` of zero is always expired for any
    /// realistic ttl.
    pub fn is_expired_at(&self, record: &IdentityRecord, now: DateTime<Utc>) -> bool {
        let Some(issued_at) = DateTime::from_timestamp(record.auth_date, 0) else {
            return true;
        };

        // A ttl beyond chrono's range never expires anything
        let Ok(ttl) = TimeDelta::from_std(self.ttl) else {
            return false;
        };

        now.signed_duration_since(issued_at).num_seconds() > ttl.num_seconds()
    }
}
