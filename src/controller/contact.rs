use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        contact::ContactMessageDto,
    },
    service::contact::ContactService,
};

pub static CONTACT_TAG: &str = "contact";

/// Submit the public contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = ContactMessageDto,
    responses(
        (status = 200, description = "Message forwarded", body = MessageDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 502, description = "Mail relay failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let contact_service = ContactService::new(state.mailer.as_ref());

    contact_service.submit(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Your message has been sent".to_string(),
        }),
    ))
}
