use crate::tests::{parts_of, test_auth, verified_identity};
use crate::{ApiError, CurrentUser};

use axum::{body::Body, extract::FromRequestParts, http::Request};

#[tokio::test]
async fn given_verified_identity_in_extensions_when_extracting_then_current_user() {
    // Given
    let auth = test_auth();
    let identity = verified_identity(&auth);
    let mut parts = parts_of(Request::builder().body(Body::empty()).unwrap());
    parts.extensions.insert(identity.clone());

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &()).await;

    // Then
    let CurrentUser(user) = result.unwrap();
    assert_eq!(&user, identity.record());
}

#[tokio::test]
async fn given_no_identity_when_extracting_then_internal_error() {
    // Given
    let mut parts = parts_of(Request::builder().body(Body::empty()).unwrap());

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &()).await;

    // Then
    assert!(matches!(result, Err(ApiError::Internal { .. })));
}

#[tokio::test]
async fn given_unverified_record_in_extensions_when_extracting_then_internal_error() {
    // Given - a bare record is not an identity the guard admitted
    let mut parts = parts_of(Request::builder().body(Body::empty()).unwrap());
    parts.extensions.insert(crate::tests::fresh_record());

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &()).await;

    // Then
    assert!(matches!(result, Err(ApiError::Internal { .. })));
}
