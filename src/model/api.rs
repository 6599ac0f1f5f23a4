use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Generic confirmation response for mutations that return no resource
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// The stored location of a freshly uploaded file
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StoredFileDto {
    /// Path relative to the uploads root, without a leading slash
    pub path: String,
}

/// Query parameters selecting the response language.
///
/// `language` is the canonical parameter name across every endpoint.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct LanguageQuery {
    pub language: Option<String>,
}
