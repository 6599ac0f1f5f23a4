use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),
    #[error(transparent)]
    Build(#[from] lettre::error::Error),
    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),
}

impl IntoResponse for MailError {
    fn into_response(self) -> Response {
        match self {
            Self::Invalid(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => {
                tracing::error!("failed to send contact email: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Failed to send your message, please try again later.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
