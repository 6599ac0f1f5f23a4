use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(String),
    #[error("Environment variable {name} has an invalid value: {reason}")]
    InvalidVar { name: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
