use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::InternalServerError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("No file was uploaded")]
    MissingFile,
    #[error("Unsupported content type {0:?}")]
    UnsupportedMediaType(String),
    #[error("File exceeds the maximum allowed size of {limit} bytes")]
    TooLarge { limit: usize },
    #[error("Stored path {0:?} is not a valid upload path")]
    InvalidPath(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InvalidPath(_) | Self::Io(_) => return InternalServerError(self).into_response(),
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
