use crate::TelegramAuth;
use crate::cookies::clear_cookie;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{AppendHeaders, IntoResponse, Response},
};

/// POST /logout - Drop both token cookies
pub async fn logout(State(auth): State<Arc<TelegramAuth>>) -> Response {
    (
        StatusCode::OK,
        AppendHeaders([
            (header::SET_COOKIE, clear_cookie(auth.cookie_name())),
            (header::SET_COOKIE, clear_cookie(auth.payload_cookie_name())),
        ]),
    )
        .into_response()
}
