//! REST API error types
//!
//! Tagged errors produced by handlers; the transport layer maps each tag to
//! a terminal HTTP status with a plain-text body. Unknown ids surface as
//! 400 (not 404) — kept for compatibility with the existing clients.

use cb_auth::AuthError;
use cb_db::DbError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid login token on a protected route (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown record id (400 for compatibility, not 404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed or missing fields (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Caller is not the owner of the record (400, surfaced as a generic
    /// save/delete failure)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Score adjustment would drive the balance below zero (400)
    #[error("Insufficient credit: {message} {location}")]
    InsufficientCredit {
        message: String,
        location: ErrorLocation,
    },

    /// Store or other internal failure (400 with a generic message)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn insufficient_credit<S: Into<String>>(message: S) -> Self {
        Self::InsufficientCredit {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Internal failure carrying a client-safe message; the cause is logged,
    /// never sent.
    #[track_caller]
    pub fn internal<S: Into<String>, E: std::fmt::Display>(message: S, cause: E) -> Self {
        let message = message.into();
        log::error!("{}: {}", message, cause);
        Self::Internal {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthorized { message, .. } => (StatusCode::UNAUTHORIZED, message),
            ApiError::NotFound { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Forbidden { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::InsufficientCredit { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal { message, .. } => (StatusCode::BAD_REQUEST, message),
        };

        (status, body).into_response()
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid id format: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidClaim { .. } => ApiError::Unauthorized {
                message: "Invalid login token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::TokenEncode { source, .. } => {
                log::error!("Token encode failed: {}", source);
                ApiError::Internal {
                    message: "Cannot issue login token".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
