use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};

use crate::{error::auth::AuthError, model::app::AppState, service::auth};

#[derive(Clone, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub token: String,
}

/// JWT claims for an authenticated admin session.
///
/// Doubles as an axum extractor: admin-only handlers take `AdminClaims` as
/// an argument and requests without a valid bearer token are rejected with
/// 401 before the handler body runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin row id
    pub sub: i32,
    pub username: String,
    /// Expiry as unix timestamp seconds
    pub exp: i64,
}

impl FromRequestParts<AppState> for AdminClaims {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        auth::decode_token(token, &state.jwt_secret)
    }
}
