use crate::ApiError;

use tg_auth::{AuthError, Rejection};

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn given_bad_request_when_rendered_then_400_with_json_body() {
    // Given
    let error = ApiError::bad_request("invalid identity data");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["message"], "invalid identity data");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500_without_location() {
    // Given
    let error = ApiError::internal("No verified identity on request");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains(".rs"));
}

#[test]
fn given_auth_error_when_converted_then_bad_input_message() {
    let error: ApiError = AuthError::no_data().into();

    match error {
        ApiError::BadRequest { message, .. } => assert_eq!(message, "bad input: no telegram data"),
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn given_auth_error_when_rendered_then_code_names_the_failure() {
    // Given
    let error: ApiError = AuthError::malformed_payload("expected a JSON object").into();

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "MALFORMED_PAYLOAD");
    assert_eq!(
        json["error"]["message"],
        "bad input: malformed payload: expected a JSON object"
    );
}

#[test]
fn given_bad_token_when_converted_then_reason_is_kept() {
    let error: ApiError = AuthError::bad_token("expected 7 fields, got 3").into();

    match error {
        ApiError::BadRequest { message, .. } => {
            assert!(message.starts_with("bad input: "));
            assert!(message.contains("expected 7 fields, got 3"));
        }
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}

#[test]
fn given_rejections_when_converted_then_messages_name_the_cause() {
    let invalid: ApiError = Rejection::InvalidData.into();
    let expired: ApiError = Rejection::Expired.into();

    match (invalid, expired) {
        (
            ApiError::BadRequest { message: invalid, .. },
            ApiError::BadRequest { message: expired, .. },
        ) => {
            assert_eq!(invalid, "invalid identity data");
            assert_eq!(expired, "data expired");
        }
        other => panic!("Expected two BadRequest errors, got {:?}", other),
    }
}
