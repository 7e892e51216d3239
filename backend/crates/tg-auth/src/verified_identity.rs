use crate::IdentityRecord;

use std::ops::Deref;

/// A record that passed signature and expiry checks.
///
/// Only [`crate::Authorizer`] can produce one, so anything accepting a
/// `VerifiedIdentity` cannot be handed unchecked data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity(IdentityRecord);

impl VerifiedIdentity {
    pub(crate) fn new(record: IdentityRecord) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &IdentityRecord {
        &self.0
    }
}

impl Deref for VerifiedIdentity {
    type Target = IdentityRecord;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
