use crate::tests::{fresh_record, test_auth, verified_identity};
use crate::{CurrentUser, LoginRequired, TelegramAuth, require_login};

use tg_auth::TokenCodec;
use tg_config::ExtractorKind;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::from_fn_with_state,
    routing::get,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn guarded_router(auth: TelegramAuth) -> Router {
    let auth = Arc::new(auth);
    let guard = LoginRequired {
        extractor: auth.extractor(ExtractorKind::Header),
        auth,
    };

    Router::new()
        .route(
            "/whoami",
            get(|CurrentUser(user): CurrentUser| async move { user.id.to_string() }),
        )
        .route_layer(from_fn_with_state(guard, require_login))
}

async fn body_text(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn given_valid_token_when_guarded_route_called_then_handler_sees_user() {
    // Given
    let auth = test_auth();
    let signed = auth.authorizer().verifier().sign(&fresh_record());
    let token = TokenCodec::default().encode(&signed);
    let request = Request::builder()
        .uri("/whoami")
        .header(header::AUTHORIZATION, token)
        .body(Body::empty())
        .unwrap();

    // When
    let response = guarded_router(auth).oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "42");
}

#[tokio::test]
async fn given_token_signed_with_other_bot_when_guarded_route_called_then_unauthorized() {
    // Given
    let other = tg_auth::SignatureVerifier::new("654321:OTHER-TOKEN");
    let token = TokenCodec::default().encode(&other.sign(&fresh_record()));
    let request = Request::builder()
        .uri("/whoami")
        .header(header::AUTHORIZATION, token)
        .body(Body::empty())
        .unwrap();

    // When
    let response = guarded_router(test_auth()).oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Unauthorized");
}

#[tokio::test]
async fn given_identity_already_attached_when_guarded_route_called_then_it_is_kept() {
    // Given - an outer guard admitted the request, no token on it
    let auth = test_auth();
    let identity = verified_identity(&auth);
    let request = Request::builder()
        .uri("/whoami")
        .extension(identity)
        .body(Body::empty())
        .unwrap();

    // When
    let response = guarded_router(auth).oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "42");
}
