use crate::cookies::find_cookie;
use crate::extract::{IdentityExtractor, InboundRequest};

use tg_auth::{AuthError, AuthResult, IdentityRecord, TokenCodec};

/// Reads a token string from a named cookie.
#[derive(Debug, Clone)]
pub struct CookieTokenExtractor {
    cookie_name: String,
    codec: TokenCodec,
}

impl CookieTokenExtractor {
    pub fn new(cookie_name: impl Into<String>, codec: TokenCodec) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            codec,
        }
    }
}

impl IdentityExtractor for CookieTokenExtractor {
    fn extract(&self, request: &InboundRequest<'_>) -> AuthResult<IdentityRecord> {
        match find_cookie(request.headers(), &self.cookie_name) {
            Some(token) => self.codec.decode(token),
            None => Err(AuthError::no_data()),
        }
    }
}
