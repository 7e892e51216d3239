//! Axum extractor for the identity admitted by `require_login`

use crate::ApiError;

use tg_auth::{IdentityRecord, VerifiedIdentity};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The verified user of the current request.
///
/// Only usable on routes behind [`crate::require_login`]; anywhere else it
/// rejects with an internal error, since that is a routing mistake rather
/// than a client one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub IdentityRecord);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match parts.extensions.get::<VerifiedIdentity>() {
                Some(identity) => Ok(CurrentUser(identity.record().clone())),
                None => Err(ApiError::internal(
                    "No verified identity on request (route is not behind require_login)",
                )),
            }
        }
    }
}
