//! REST API error types
//!
//! Login failures and server-side faults render as JSON bodies with a
//! machine-readable code. The protected flow never uses these: it answers
//! with the configured unauthorized response instead.

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "BAD_REQUEST")
    pub code: String,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            code: "BAD_REQUEST",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match &self {
            ApiError::BadRequest { .. } => log::warn!("{}", self),
            ApiError::Internal { .. } => log::error!("{}", self),
        }

        let (status, body) = match self {
            ApiError::BadRequest { code, message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: code.into(),
                    message,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Extraction failures on the login route are the client's fault
impl From<tg_auth::AuthError> for ApiError {
    #[track_caller]
    fn from(e: tg_auth::AuthError) -> Self {
        ApiError::BadRequest {
            code: e.error_code(),
            message: format!("bad input: {}", e.reason()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tg_auth::Rejection> for ApiError {
    #[track_caller]
    fn from(rejection: tg_auth::Rejection) -> Self {
        ApiError::bad_request(rejection.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
