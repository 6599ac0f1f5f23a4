use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        auth::{LoginDto, TokenDto},
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Authenticate an admin and issue a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.jwt_secret);

    let token = auth_service.login(&payload).await?;

    Ok((StatusCode::OK, Json(token)))
}
