use crate::cookies::find_cookie;
use crate::extract::{IdentityExtractor, InboundRequest};

use tg_auth::{AuthError, AuthResult, CookiePayloadCodec, IdentityRecord};

/// Reads a `key=value` payload cookie, `X-telegram-data` by default.
#[derive(Debug, Clone)]
pub struct CookiePayloadExtractor {
    cookie_name: String,
    codec: CookiePayloadCodec,
}

impl CookiePayloadExtractor {
    pub fn new(cookie_name: impl Into<String>, codec: CookiePayloadCodec) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            codec,
        }
    }
}

impl IdentityExtractor for CookiePayloadExtractor {
    fn extract(&self, request: &InboundRequest<'_>) -> AuthResult<IdentityRecord> {
        match find_cookie(request.headers(), &self.cookie_name) {
            Some(payload) => self.codec.decode(payload),
            None => Err(AuthError::no_data()),
        }
    }
}
