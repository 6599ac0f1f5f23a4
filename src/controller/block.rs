use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        auth::AdminClaims,
        content::{BlockDto, DeleteBlocksDto, SaveBlockDto},
    },
    service::content::ExtraContentService,
};

pub static BLOCK_TAG: &str = "block";

/// Update a single content block
#[utoipa::path(
    put,
    path = "/api/blocks/{id}",
    tag = BLOCK_TAG,
    params(("id" = i32, Path, description = "Block id")),
    request_body = SaveBlockDto,
    responses(
        (status = 200, description = "Block updated", body = BlockDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Block not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_block(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<SaveBlockDto>,
) -> Result<impl IntoResponse, Error> {
    let block_service = ExtraContentService::new(&state.db, &state.languages);

    let block = block_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(block)))
}

/// Delete one editor row: the captured block ids across all languages
#[utoipa::path(
    delete,
    path = "/api/blocks",
    tag = BLOCK_TAG,
    request_body = DeleteBlocksDto,
    responses(
        (status = 200, description = "Blocks deleted", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_blocks(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<DeleteBlocksDto>,
) -> Result<impl IntoResponse, Error> {
    let block_service = ExtraContentService::new(&state.db, &state.languages);

    let removed = block_service.delete_group(&payload.ids).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Deleted {removed} blocks"),
        }),
    ))
}
