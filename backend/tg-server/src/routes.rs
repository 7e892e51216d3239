use crate::api::{login::login, logout::logout, me::me};
use crate::{AppState, health, require_login};

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Routes that need a logged-in user
    let protected = Router::<AppState>::new()
        .route("/me", get(me))
        .route_layer(from_fn_with_state(state.guard.clone(), require_login));

    Router::new()
        // Login / logout
        .route("/login", get(login).post(login))
        .route("/logout", post(logout))
        .merge(protected)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
