use crate::send::TokenSender;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tg_auth::{TokenCodec, VerifiedIdentity};

/// Body of a successful JSON login: `{"token": "<token>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct JsonSender {
    codec: TokenCodec,
}

impl JsonSender {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }
}

impl TokenSender for JsonSender {
    fn send(&self, identity: &VerifiedIdentity) -> Response {
        let body = TokenResponse {
            token: self.codec.encode(identity),
        };

        (StatusCode::OK, Json(body)).into_response()
    }
}
