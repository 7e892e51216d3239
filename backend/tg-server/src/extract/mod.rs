//! Identity extractors: turn an inbound request into an unverified
//! [`IdentityRecord`].

pub mod cookie_payload;
pub mod cookie_token;
pub mod header_token;
pub mod json_body;
pub mod query;

pub use cookie_payload::CookiePayloadExtractor;
pub use cookie_token::CookieTokenExtractor;
pub use header_token::HeaderTokenExtractor;
pub use json_body::JsonBodyExtractor;
pub use query::QueryExtractor;

use axum::http::{HeaderMap, request::Parts};
use tg_auth::{AuthResult, IdentityRecord};

/// The parts of a request an extractor may look at.
///
/// The body is only present on the login route, where the handler buffers
/// it up front. Middleware never reads bodies.
#[derive(Debug, Clone, Copy)]
pub struct InboundRequest<'a> {
    pub parts: &'a Parts,
    pub body: Option<&'a [u8]>,
}

impl<'a> InboundRequest<'a> {
    pub fn head(parts: &'a Parts) -> Self {
        Self { parts, body: None }
    }

    pub fn with_body(parts: &'a Parts, body: &'a [u8]) -> Self {
        Self {
            parts,
            body: Some(body),
        }
    }

    pub fn headers(&self) -> &'a HeaderMap {
        &self.parts.headers
    }
}

/// Produce an identity record from a request.
///
/// Implementations never check the signature or expiry; that is the
/// [`tg_auth::Authorizer`]'s job.
pub trait IdentityExtractor: Send + Sync {
    fn extract(&self, request: &InboundRequest<'_>) -> AuthResult<IdentityRecord>;
}
