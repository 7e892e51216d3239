use crate::cookies::set_cookie;
use crate::send::TokenSender;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tg_auth::{TokenCodec, VerifiedIdentity};

/// Token string in a `Set-Cookie` header, empty body
#[derive(Debug, Clone)]
pub struct CookieTokenSender {
    cookie_name: String,
    codec: TokenCodec,
}

impl CookieTokenSender {
    pub fn new(cookie_name: impl Into<String>, codec: TokenCodec) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            codec,
        }
    }
}

impl TokenSender for CookieTokenSender {
    fn send(&self, identity: &VerifiedIdentity) -> Response {
        let cookie = set_cookie(&self.cookie_name, &self.codec.encode(identity));

        (StatusCode::OK, [(header::SET_COOKIE, cookie)]).into_response()
    }
}
