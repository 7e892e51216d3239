use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No telegram data {location}")]
    NoData { location: ErrorLocation },

    #[error("Bad token: {message} {location}")]
    BadToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed payload: {message} {location}")]
    MalformedPayload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid separator '{separator}': {message} {location}")]
    InvalidSeparator {
        separator: char,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn no_data() -> Self {
        AuthError::NoData {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_token<S: Into<String>>(message: S) -> Self {
        AuthError::BadToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed_payload<S: Into<String>>(message: S) -> Self {
        AuthError::MalformedPayload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code, stable across releases
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoData { .. } => "NO_DATA",
            Self::BadToken { .. } => "BAD_TOKEN",
            Self::MalformedPayload { .. } => "MALFORMED_PAYLOAD",
            Self::InvalidSeparator { .. } => "INVALID_SEPARATOR",
        }
    }

    /// Client-safe description without the source location
    pub fn reason(&self) -> String {
        match self {
            Self::NoData { .. } => "no telegram data".to_string(),
            Self::BadToken { message, .. } => format!("bad token: {message}"),
            Self::MalformedPayload { message, .. } => format!("malformed payload: {message}"),
            Self::InvalidSeparator {
                separator, message, ..
            } => format!("invalid separator '{separator}': {message}"),
        }
    }
}

pub type AuthResult<T> = StdResult<T, AuthError>;
