//! Error types for the fabrica server.
//!
//! Domain-specific error enums built with `thiserror`, each implementing
//! `IntoResponse` for axum, aggregated into a single [`Error`] type used as
//! the return error of controllers and services. Unexpected errors are
//! logged server-side and surfaced as a generic message so internals never
//! leak to API consumers.

pub mod auth;
pub mod config;
pub mod contact;
pub mod content;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        auth::AuthError, config::ConfigError, contact::MailError, content::ContentError,
        storage::StorageError,
    },
    model::api::ErrorDto,
};

/// Main error type for the fabrica server.
///
/// Aggregates the domain error enums and external library errors with
/// `#[from]` conversions so `?` works across the controller/service/data
/// layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Admin authentication error (credentials, bearer token).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Content validation or lookup error (slug, language set, block shape).
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Contact form mail error (validation or SMTP relay failure).
    #[error(transparent)]
    MailError(#[from] MailError),
    /// Uploaded file storage error (size, media type, disk IO).
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Malformed multipart request body.
    #[error(transparent)]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            Self::MailError(err) => err.into_response(),
            Self::StorageError(err) => err.into_response(),
            Self::MultipartError(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging and returns a generic error
/// message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
