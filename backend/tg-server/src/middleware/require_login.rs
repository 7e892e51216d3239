//! Login-required middleware for protected routes

use crate::TelegramAuth;
use crate::extract::{IdentityExtractor, InboundRequest};

use tg_auth::VerifiedIdentity;

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::{debug, warn};

/// State for [`require_login`]: where to look for the token, and how to judge it.
#[derive(Clone)]
pub struct LoginRequired {
    pub auth: Arc<TelegramAuth>,
    pub extractor: Arc<dyn IdentityExtractor>,
}

/// Admit the request only if it carries a valid, unexpired token.
///
/// On success the [`VerifiedIdentity`] is stored in the request extensions,
/// where [`crate::CurrentUser`] picks it up. On failure the configured
/// unauthorized response is returned and the reason is only logged.
pub async fn require_login(
    State(guard): State<LoginRequired>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    // An outer guard already admitted this request
    if parts.extensions.get::<VerifiedIdentity>().is_some() {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let outcome = guard
        .extractor
        .extract(&InboundRequest::head(&parts))
        .map_err(|e| e.reason())
        .and_then(|record| {
            guard
                .auth
                .authorizer()
                .authorize(record)
                .map_err(|rejection| rejection.to_string())
        });

    match outcome {
        Ok(identity) => {
            debug!("Admitted telegram user {} to {}", identity.id, parts.uri.path());
            parts.extensions.insert(identity);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(reason) => {
            warn!("Unauthorized request to {}: {}", parts.uri.path(), reason);
            guard.auth.unauthorized().respond()
        }
    }
}
