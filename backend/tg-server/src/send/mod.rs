//! Token senders: deliver a verified identity's token to the client.

pub mod cookie_payload;
pub mod cookie_token;
pub mod json;
pub mod plain_text;

pub use cookie_payload::CookiePayloadSender;
pub use cookie_token::CookieTokenSender;
pub use json::{JsonSender, TokenResponse};
pub use plain_text::PlainTextSender;

use axum::response::Response;
use tg_auth::VerifiedIdentity;

/// Only ever called after the record passed the authorizer.
pub trait TokenSender: Send + Sync {
    fn send(&self, identity: &VerifiedIdentity) -> Response;
}
