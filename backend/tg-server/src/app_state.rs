use crate::error::Result as ServerErrorResult;
use crate::{LoginEndpoint, LoginRequired, TelegramAuth};

use tg_config::AuthConfig;

use std::sync::Arc;

use axum::extract::FromRef;

/// Shared application state for all routes
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<TelegramAuth>,
    pub login: LoginEndpoint,
    pub guard: LoginRequired,
}

impl AppState {
    /// Wire the login endpoint and the protected-route guard from config.
    pub fn from_config(config: &AuthConfig) -> ServerErrorResult<Self> {
        let auth = Arc::new(TelegramAuth::from_config(config)?);

        let login = LoginEndpoint {
            auth: auth.clone(),
            extractor: auth.extractor(config.login_extractor),
            sender: auth.sender(config.login_sender),
        };
        let guard = LoginRequired {
            auth: auth.clone(),
            extractor: auth.extractor(config.protected_extractor),
        };

        Ok(Self { auth, login, guard })
    }
}

impl FromRef<AppState> for Arc<TelegramAuth> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for LoginEndpoint {
    fn from_ref(state: &AppState) -> Self {
        state.login.clone()
    }
}

impl FromRef<AppState> for LoginRequired {
    fn from_ref(state: &AppState) -> Self {
        state.guard.clone()
    }
}
