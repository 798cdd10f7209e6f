//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type returned
//! by services and controllers. Its `kind()` classification decides the status code, so the
//! boundary never inspects message text.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-caused validation failure or domain conflict.
    ///
    /// Results in 400 Bad Request with the validation code as the message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Requested resource does not exist.
    ///
    /// Results in 404 Not Found with the provided code, e.g. `cars-not-found`.
    #[error("{0}")]
    NotFound(String),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error carrying the driver message.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Classification of an `AppError` used to pick the response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    DataAccess,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DbErr(_) | Self::ConfigErr(_) | Self::Io(_) => ErrorKind::DataAccess,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `DbErr` with the driver message, and for startup-only
///   variants with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                tracing::warn!("Rejected request: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        message: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { message: msg })).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Data access error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        message: err.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
