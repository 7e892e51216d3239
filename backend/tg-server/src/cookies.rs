//! Minimal `Cookie` / `Set-Cookie` handling for the token cookies.
//!
//! Values written here are always percent-encoded by the codecs, so no
//! quoting or escaping is needed on either side.

use axum::http::{HeaderMap, header};

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

/// Find the first non-empty value of cookie `name` across all `Cookie`
/// headers. A cleared duplicate never hides a live one.
pub fn find_cookie<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            let value = value.trim();
            (key == name && !value.is_empty()).then_some(value)
        })
}

/// `Set-Cookie` value that stores `value` under `name`.
pub fn set_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; {COOKIE_ATTRIBUTES}")
}

/// `Set-Cookie` value that makes the browser drop cookie `name`.
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; {COOKIE_ATTRIBUTES}; Max-Age=0")
}
