use crate::send::TokenSender;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tg_auth::{TokenCodec, VerifiedIdentity};

/// Token string as a `text/plain` body
#[derive(Debug, Clone)]
pub struct PlainTextSender {
    codec: TokenCodec,
}

impl PlainTextSender {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }
}

impl TokenSender for PlainTextSender {
    fn send(&self, identity: &VerifiedIdentity) -> Response {
        (StatusCode::OK, self.codec.encode(identity)).into_response()
    }
}
