use crate::{ExpiryPolicy, IdentityRecord, SignatureVerifier, VerifiedIdentity};

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use thiserror::Error;

/// Why a well-formed record was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("invalid identity data")]
    InvalidData,

    #[error("data expired")]
    Expired,
}

/// Signature check followed by expiry check
#[derive(Debug, Clone)]
pub struct Authorizer {
    verifier: SignatureVerifier,
    expiry: ExpiryPolicy,
}

impl Authorizer {
    pub fn new(bot_token: &str, ttl: Duration) -> Self {
        Self {
            verifier: SignatureVerifier::new(bot_token),
            expiry: ExpiryPolicy::new(ttl),
        }
    }

    pub fn verifier(&self) -> &SignatureVerifier {
        &self.verifier
    }

    pub fn authorize(&self, record: IdentityRecord) -> Result<VerifiedIdentity, Rejection> {
        self.authorize_at(record, Utc::now())
    }

    pub fn authorize_at(
        &self,
        record: IdentityRecord,
        now: DateTime<Utc>,
    ) -> Result<VerifiedIdentity, Rejection> {
        if !self.verifier.is_telegram_authorization(&record) {
            debug!("Signature mismatch for telegram user {}", record.id);
            return Err(Rejection::InvalidData);
        }

        if self.expiry.is_expired_at(&record, now) {
            debug!(
                "Expired data for telegram user {} (auth_date={})",
                record.id, record.auth_date
            );
            return Err(Rejection::Expired);
        }

        Ok(VerifiedIdentity::new(record))
    }
}
