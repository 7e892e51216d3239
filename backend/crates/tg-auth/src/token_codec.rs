use crate::escape::{self, is_valid_separator};
use crate::identity_record::parse_lenient;
use crate::{AuthError, AuthResult, DEFAULT_TOKEN_SEPARATOR, IdentityRecord, TOKEN_FIELD_COUNT};

use std::panic::Location;

use error_location::ErrorLocation;

/// Positional token format.
///
/// ```text
/// {id}{sep}{first_name}{sep}{last_name}{sep}{username}{sep}{photo_url}{sep}{auth_date}{sep}{hash}
/// ```
///
/// Each field is percent-encoded before joining and the joined string is
/// percent-encoded again, so the result is safe in headers, cookies and
/// query strings and a field can never contain a bare separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCodec {
    separator: char,
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self {
            separator: DEFAULT_TOKEN_SEPARATOR,
        }
    }
}

impl TokenCodec {
    #[track_caller]
    pub fn new(separator: char) -> AuthResult<Self> {
        if !is_valid_separator(separator) {
            return Err(AuthError::InvalidSeparator {
                separator,
                message: "must be ASCII punctuation outside '-', '_', '.', '~', '%'".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { separator })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn encode(&self, record: &IdentityRecord) -> String {
        let id = record.id.to_string();
        let auth_date = record.auth_date.to_string();
        let fields: [&str; TOKEN_FIELD_COUNT] = [
            id.as_str(),
            &record.first_name,
            &record.last_name,
            &record.username,
            &record.photo_url,
            auth_date.as_str(),
            &record.hash,
        ];

        let mut buf = [0u8; 4];
        let separator: &str = self.separator.encode_utf8(&mut buf);

        let joined = fields
            .iter()
            .map(|field| escape::encode(field))
            .collect::<Vec<_>>()
            .join(separator);

        escape::encode(&joined).into_owned()
    }

    /// Parse a token produced by [`TokenCodec::encode`].
    ///
    /// Structure is strict (exactly seven fields, valid escapes), integers
    /// are not: an unparsable `id` or `auth_date` becomes zero and the record
    /// is left for signature verification to reject.
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthResult<IdentityRecord> {
        let unescaped = escape::decode(token)?;

        let params: Vec<&str> = unescaped.split(self.separator).collect();
        if params.len() != TOKEN_FIELD_COUNT {
            return Err(AuthError::bad_token(format!(
                "expected {} fields, got {}",
                TOKEN_FIELD_COUNT,
                params.len()
            )));
        }

        let mut fields = Vec::with_capacity(TOKEN_FIELD_COUNT);
        for param in params {
            fields.push(escape::decode(param)?);
        }

        Ok(IdentityRecord {
            id: parse_lenient(&fields[0]),
            first_name: fields[1].to_string(),
            last_name: fields[2].to_string(),
            username: fields[3].to_string(),
            photo_url: fields[4].to_string(),
            auth_date: parse_lenient(&fields[5]),
            hash: fields[6].to_string(),
        })
    }
}
