use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{entity} ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("{entity} with slug {slug:?} not found")]
    SlugNotFound { entity: &'static str, slug: String },
    #[error("Slug {0:?} is already in use")]
    SlugTaken(String),
    #[error("Slug {0:?} is empty or contains characters other than lowercase letters, digits and dashes")]
    InvalidSlug(String),
    #[error("Language {0:?} is not in the configured language set")]
    UnsupportedLanguage(String),
    #[error("More than one translation submitted for language {0:?}")]
    DuplicateLanguage(String),
    #[error("Missing translation for language {0:?}")]
    MissingLanguage(String),
    #[error("Unknown block type {0:?}")]
    UnknownBlockType(String),
    #[error("Block payload for a {0} block must be valid JSON")]
    InvalidBlockPayload(&'static str),
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound { .. } | Self::SlugNotFound { .. } => StatusCode::NOT_FOUND,
            Self::SlugTaken(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
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
