use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Invalid or expired bearer token")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::InvalidCredentials => "Invalid username or password".to_string(),
            Self::MissingToken | Self::InvalidToken => "Authentication required".to_string(),
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto { error: message })).into_response()
    }
}
