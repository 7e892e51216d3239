pub mod api;
pub mod app_state;
pub mod cookies;
pub mod error;
pub mod extract;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod send;
pub mod telegram_auth;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    login::{LoginEndpoint, login},
    logout::logout,
    me::me,
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use extract::{
    CookiePayloadExtractor, CookieTokenExtractor, HeaderTokenExtractor, IdentityExtractor,
    InboundRequest, JsonBodyExtractor, QueryExtractor,
};
pub use middleware::require_login::{LoginRequired, require_login};
pub use send::{
    CookiePayloadSender, CookieTokenSender, JsonSender, PlainTextSender, TokenResponse,
    TokenSender,
};
pub use telegram_auth::{TelegramAuth, UnauthorizedResponse};

pub use crate::routes::build_router;

/// Upper bound on a buffered login body
pub const LOGIN_BODY_LIMIT: usize = 16 * 1024;
