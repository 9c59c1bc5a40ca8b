//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// The request-level variants (`InvalidInput`, `MissingParameter`, `NotFound`,
/// `DuplicateFavorite`) carry the message shown to the client. Every other variant
/// is reported as a 500 with a generic message and logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected state indicating a bug or corrupted data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Request body is absent or not a JSON object of the expected shape.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    InvalidInput(String),

    /// A required identifier was not supplied.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    MissingParameter(String),

    /// Referenced user, character, planet or favorite does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// The user already has this planet or character as a favorite.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    DuplicateFavorite(String),
}

impl AppError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::MissingParameter(_) | Self::DuplicateFavorite(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors return their own message in an `ErrorDto`. Everything else goes
/// through `InternalServerError`, which logs the detail and hides it from the client.
///
/// # Returns
/// - 400 Bad Request - For `InvalidInput`, `MissingParameter` and `DuplicateFavorite`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::InvalidInput(message)
            | Self::MissingParameter(message)
            | Self::NotFound(message)
            | Self::DuplicateFavorite(message) => error_response(status, message),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorDto {
            message,
            status_code: status.as_u16(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
