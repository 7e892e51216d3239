use crate::api::error::{ApiError, Result as ApiResult};
use crate::extract::{IdentityExtractor, InboundRequest};
use crate::send::TokenSender;
use crate::{LOGIN_BODY_LIMIT, TelegramAuth};

use std::sync::Arc;

use axum::{
    body::to_bytes,
    extract::{Request, State},
    response::Response,
};
use log::info;

/// State for the [`login`] handler
#[derive(Clone)]
pub struct LoginEndpoint {
    pub auth: Arc<TelegramAuth>,
    pub extractor: Arc<dyn IdentityExtractor>,
    pub sender: Arc<dyn TokenSender>,
}

/// GET|POST /login - Exchange widget data for a token
///
/// Failures are 400s naming the cause: `bad input: <reason>`,
/// `invalid identity data`, or `data expired`.
pub async fn login(State(endpoint): State<LoginEndpoint>, request: Request) -> ApiResult<Response> {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, LOGIN_BODY_LIMIT)
        .await
        .map_err(|e| ApiError::bad_request(format!("bad input: unreadable body: {e}")))?;

    let record = endpoint
        .extractor
        .extract(&InboundRequest::with_body(&parts, &body))?;
    let identity = endpoint.auth.authorizer().authorize(record)?;

    info!("Telegram user {} logged in", identity.id);

    Ok(endpoint.sender.send(&identity))
}
