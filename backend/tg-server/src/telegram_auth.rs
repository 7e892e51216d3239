use crate::error::{Result as ServerErrorResult, ServerError};
use crate::extract::{
    CookiePayloadExtractor, CookieTokenExtractor, HeaderTokenExtractor, IdentityExtractor,
    JsonBodyExtractor, QueryExtractor,
};
use crate::send::{CookiePayloadSender, CookieTokenSender, JsonSender, PlainTextSender, TokenSender};

use tg_auth::{Authorizer, CookiePayloadCodec, TokenCodec};
use tg_config::{AuthConfig, ExtractorKind, SenderKind};

use std::sync::Arc;

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

/// What a protected route answers when the request is not authorized.
///
/// The rejection reason is never part of the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnauthorizedResponse {
    /// `401 Unauthorized` with a generic body
    Deny,
    /// `303 See Other` to the given location
    Redirect(String),
}

impl UnauthorizedResponse {
    pub fn respond(&self) -> Response {
        match self {
            UnauthorizedResponse::Deny => {
                (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
            UnauthorizedResponse::Redirect(location) => Redirect::to(location).into_response(),
        }
    }
}

/// Immutable auth setup shared by every handler and middleware.
///
/// Built once from [`AuthConfig`] at startup.
#[derive(Debug, Clone)]
pub struct TelegramAuth {
    authorizer: Authorizer,
    token_codec: TokenCodec,
    cookie_codec: CookiePayloadCodec,
    header_name: HeaderName,
    cookie_name: String,
    payload_cookie_name: String,
    unauthorized: UnauthorizedResponse,
}

impl TelegramAuth {
    /// Expects a config that already passed `AuthConfig::validate()`.
    pub fn from_config(config: &AuthConfig) -> ServerErrorResult<Self> {
        let bot_token = config
            .bot_token
            .as_deref()
            .ok_or_else(|| ServerError::InvalidSetting {
                setting: "auth.bot_token",
                message: "missing".to_string(),
            })?;

        let header_name = HeaderName::try_from(config.header_name.as_str()).map_err(|e| {
            ServerError::InvalidSetting {
                setting: "auth.header_name",
                message: e.to_string(),
            }
        })?;

        let unauthorized = match &config.unauthorized_redirect {
            Some(location) => {
                HeaderValue::try_from(location.as_str()).map_err(|e| {
                    ServerError::InvalidSetting {
                        setting: "auth.unauthorized_redirect",
                        message: e.to_string(),
                    }
                })?;
                UnauthorizedResponse::Redirect(location.clone())
            }
            None => UnauthorizedResponse::Deny,
        };

        Ok(Self {
            authorizer: Authorizer::new(bot_token, config.ttl()),
            token_codec: TokenCodec::new(config.token_separator)?,
            cookie_codec: CookiePayloadCodec::new(config.cookie_separator)?,
            header_name,
            cookie_name: config.cookie_name.clone(),
            payload_cookie_name: config.payload_cookie_name.clone(),
            unauthorized,
        })
    }

    pub fn authorizer(&self) -> &Authorizer {
        &self.authorizer
    }

    pub fn token_codec(&self) -> &TokenCodec {
        &self.token_codec
    }

    pub fn cookie_codec(&self) -> &CookiePayloadCodec {
        &self.cookie_codec
    }

    pub fn header_name(&self) -> &HeaderName {
        &self.header_name
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn payload_cookie_name(&self) -> &str {
        &self.payload_cookie_name
    }

    pub fn unauthorized(&self) -> &UnauthorizedResponse {
        &self.unauthorized
    }

    pub fn extractor(&self, kind: ExtractorKind) -> Arc<dyn IdentityExtractor> {
        match kind {
            ExtractorKind::Query => Arc::new(QueryExtractor),
            ExtractorKind::Json => Arc::new(JsonBodyExtractor),
            ExtractorKind::Header => Arc::new(HeaderTokenExtractor::new(
                self.header_name.clone(),
                self.token_codec,
            )),
            ExtractorKind::Cookie => Arc::new(CookieTokenExtractor::new(
                self.cookie_name.clone(),
                self.token_codec,
            )),
            ExtractorKind::CookiePayload => Arc::new(CookiePayloadExtractor::new(
                self.payload_cookie_name.clone(),
                self.cookie_codec,
            )),
        }
    }

    pub fn sender(&self, kind: SenderKind) -> Arc<dyn TokenSender> {
        match kind {
            SenderKind::Plain => Arc::new(PlainTextSender::new(self.token_codec)),
            SenderKind::Json => Arc::new(JsonSender::new(self.token_codec)),
            SenderKind::Cookie => Arc::new(CookieTokenSender::new(
                self.cookie_name.clone(),
                self.token_codec,
            )),
            SenderKind::CookiePayload => Arc::new(CookiePayloadSender::new(
                self.payload_cookie_name.clone(),
                self.cookie_codec,
            )),
        }
    }
}
