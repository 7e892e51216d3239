use crate::{AuthError, AuthResult};

use std::borrow::Cow;

/// A separator must never survive percent-encoding of a field value,
/// so the URL "unreserved" set and `%` itself are excluded.
pub(crate) fn is_valid_separator(separator: char) -> bool {
    separator.is_ascii_punctuation() && !matches!(separator, '-' | '_' | '.' | '~' | '%')
}

pub(crate) fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Strict percent-decoding: every `%` must start a two digit hex escape
/// and the decoded bytes must be UTF-8.
#[track_caller]
pub(crate) fn decode(value: &str) -> AuthResult<Cow<'_, str>> {
    if !has_valid_escapes(value) {
        return Err(AuthError::bad_token("malformed percent-encoding"));
    }

    match urlencoding::decode(value) {
        Ok(decoded) => Ok(decoded),
        Err(e) => Err(AuthError::bad_token(format!("invalid UTF-8: {e}"))),
    }
}

fn has_valid_escapes(value: &str) -> bool {
    let mut bytes = value.bytes();
    while let Some(byte) = bytes.next() {
        if byte == b'%' {
            let escaped = (bytes.next(), bytes.next());
            if !matches!(escaped, (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit())
            {
                return false;
            }
        }
    }
    true
}
