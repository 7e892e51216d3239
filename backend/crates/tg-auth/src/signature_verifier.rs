use crate::IdentityRecord;

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Checks widget signatures for one bot.
///
/// The bot token is hashed once on construction and only the keyed MAC
/// state is kept.
#[derive(Clone)]
pub struct SignatureVerifier {
    keyed_mac: HmacSha256,
}

impl SignatureVerifier {
    pub fn new(bot_token: &str) -> Self {
        let secret_key = Sha256::digest(bot_token.as_bytes());

        // HMAC accepts keys of any length, new_from_slice cannot fail here
        let keyed_mac = HmacSha256::new_from_slice(&secret_key)
            .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts 32 byte keys"));

        Self { keyed_mac }
    }

    /// Lowercase hex `HMAC-SHA256(SHA-256(bot_token), check_string)`
    pub fn generate_hash(&self, record: &IdentityRecord) -> String {
        hex::encode(self.mac(record))
    }

    /// Return a copy of `record` carrying this bot's signature.
    ///
    /// For records that do not come from the widget (bots, tests).
    pub fn sign(&self, record: &IdentityRecord) -> IdentityRecord {
        IdentityRecord {
            hash: self.generate_hash(record),
            ..record.clone()
        }
    }

    /// Whether `record.hash` matches the recomputed signature.
    ///
    /// Comparison is constant-time over the decoded digest bytes.
    pub fn is_telegram_authorization(&self, record: &IdentityRecord) -> bool {
        let Ok(claimed) = hex::decode(&record.hash) else {
            return false;
        };

        let expected = self.mac(record);
        expected.as_slice().ct_eq(claimed.as_slice()).into()
    }

    fn mac(&self, record: &IdentityRecord) -> [u8; 32] {
        let mut mac = self.keyed_mac.clone();
        mac.update(record.check_string().as_bytes());

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&mac.finalize().into_bytes());
        digest
    }
}

impl fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureVerifier").finish_non_exhaustive()
    }
}
