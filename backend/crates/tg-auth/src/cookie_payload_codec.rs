use crate::escape::{self, is_valid_separator};
use crate::{AuthError, AuthResult, DEFAULT_COOKIE_SEPARATOR, IdentityRecord};

use std::panic::Location;

use error_location::ErrorLocation;

/// Unordered `key=value` cookie payload, e.g. `id=1&first_name=Ann&...&hash=ab12`.
///
/// Values are escaped individually and the joined payload is escaped as a
/// whole. Pairs are split on the first `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePayloadCodec {
    separator: char,
}

impl Default for CookiePayloadCodec {
    fn default() -> Self {
        Self {
            separator: DEFAULT_COOKIE_SEPARATOR,
        }
    }
}

impl CookiePayloadCodec {
    #[track_caller]
    pub fn new(separator: char) -> AuthResult<Self> {
        if separator == '=' || !is_valid_separator(separator) {
            return Err(AuthError::InvalidSeparator {
                separator,
                message: "must be ASCII punctuation outside '=', '-', '_', '.', '~', '%'"
                    .to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { separator })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn encode(&self, record: &IdentityRecord) -> String {
        let mut pairs = vec![
            pair("id", &record.id.to_string()),
            pair("first_name", &record.first_name),
        ];
        for (key, value) in [
            ("last_name", &record.last_name),
            ("username", &record.username),
            ("photo_url", &record.photo_url),
        ] {
            if !value.is_empty() {
                pairs.push(pair(key, value));
            }
        }
        pairs.push(pair("auth_date", &record.auth_date.to_string()));
        pairs.push(pair("hash", &record.hash));

        let mut buf = [0u8; 4];
        let separator: &str = self.separator.encode_utf8(&mut buf);

        escape::encode(&pairs.join(separator)).into_owned()
    }

    #[track_caller]
    pub fn decode(&self, payload: &str) -> AuthResult<IdentityRecord> {
        let unescaped = escape::decode(payload)?;

        let mut pairs = Vec::new();
        for raw_pair in unescaped.split(self.separator) {
            let (key, value) = raw_pair.split_once('=').unwrap_or((raw_pair, ""));
            pairs.push((key, escape::decode(value)?.into_owned()));
        }

        Ok(IdentityRecord::from_pairs(pairs))
    }
}

fn pair(key: &str, value: &str) -> String {
    format!("{}={}", key, escape::encode(value))
}
