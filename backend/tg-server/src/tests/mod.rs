mod api;
mod require_login;

use crate::TelegramAuth;

use tg_auth::{IdentityRecord, VerifiedIdentity};
use tg_config::AuthConfig;

use axum::{body::Body, http::Request, http::request::Parts};

pub(crate) const TEST_BOT_TOKEN: &str = "123456:TEST-TOKEN";

pub(crate) fn test_auth_config() -> AuthConfig {
    AuthConfig {
        bot_token: Some(TEST_BOT_TOKEN.to_string()),
        ..Default::default()
    }
}

pub(crate) fn test_auth() -> TelegramAuth {
    TelegramAuth::from_config(&test_auth_config()).unwrap()
}

/// Unsigned record issued just now
pub(crate) fn fresh_record() -> IdentityRecord {
    IdentityRecord {
        id: 42,
        first_name: "Pavel".to_string(),
        last_name: "Durov".to_string(),
        username: "durov".to_string(),
        photo_url: "https://t.me/i/userpic/320/durov.jpg".to_string(),
        auth_date: chrono::Utc::now().timestamp(),
        hash: String::new(),
    }
}

pub(crate) fn verified_identity(auth: &TelegramAuth) -> VerifiedIdentity {
    let signed = auth.authorizer().verifier().sign(&fresh_record());
    auth.authorizer().authorize(signed).unwrap()
}

pub(crate) fn parts_of(request: Request<Body>) -> Parts {
    request.into_parts().0
}
