use crate::extract::{IdentityExtractor, InboundRequest};

use axum::http::HeaderName;
use tg_auth::{AuthError, AuthResult, IdentityRecord, TokenCodec};

const BEARER_PREFIX: &str = "Bearer ";

/// Reads a token string from a request header, `Authorization` by default.
///
/// A leading `Bearer ` scheme is tolerated.
#[derive(Debug, Clone)]
pub struct HeaderTokenExtractor {
    header_name: HeaderName,
    codec: TokenCodec,
}

impl HeaderTokenExtractor {
    pub fn new(header_name: HeaderName, codec: TokenCodec) -> Self {
        Self { header_name, codec }
    }
}

impl IdentityExtractor for HeaderTokenExtractor {
    fn extract(&self, request: &InboundRequest<'_>) -> AuthResult<IdentityRecord> {
        let Some(value) = request.headers().get(&self.header_name) else {
            return Err(AuthError::no_data());
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::bad_token("header value is not visible ASCII"))?
            .trim();
        let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();

        if token.is_empty() {
            return Err(AuthError::no_data());
        }

        self.codec.decode(token)
    }
}
