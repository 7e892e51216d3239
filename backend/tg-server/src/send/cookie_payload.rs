use crate::cookies::set_cookie;
use crate::send::TokenSender;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tg_auth::{CookiePayloadCodec, VerifiedIdentity};

/// `key=value` payload in a `Set-Cookie` header, empty body
#[derive(Debug, Clone)]
pub struct CookiePayloadSender {
    cookie_name: String,
    codec: CookiePayloadCodec,
}

impl CookiePayloadSender {
    pub fn new(cookie_name: impl Into<String>, codec: CookiePayloadCodec) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            codec,
        }
    }
}

impl TokenSender for CookiePayloadSender {
    fn send(&self, identity: &VerifiedIdentity) -> Response {
        let cookie = set_cookie(&self.cookie_name, &self.codec.encode(identity));

        (StatusCode::OK, [(header::SET_COOKIE, cookie)]).into_response()
    }
}
