use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use entity::extra_content::OwnerType;

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, LanguageQuery},
        app::AppState,
        auth::AdminClaims,
        content::{AboutPageDto, BlockDto, BlockGroupDto, SaveAboutPageDto, SaveBlockDto},
    },
    service::content::{AboutPageService, ExtraContentService},
};

pub static ABOUT_TAG: &str = "about";

/// The about page with its translations
#[utoipa::path(
    get,
    path = "/api/about",
    tag = ABOUT_TAG,
    params(LanguageQuery),
    responses(
        (status = 200, description = "The about page", body = AboutPageDto),
        (status = 400, description = "Unsupported language", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_about(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let about_service = AboutPageService::new(&state.db, &state.languages);

    let page = about_service.get(query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Replace the about page translations
#[utoipa::path(
    put,
    path = "/api/about",
    tag = ABOUT_TAG,
    request_body = SaveAboutPageDto,
    responses(
        (status = 200, description = "About page updated", body = AboutPageDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_about(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<SaveAboutPageDto>,
) -> Result<impl IntoResponse, Error> {
    let about_service = AboutPageService::new(&state.db, &state.languages);

    let page = about_service.update(&payload).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// About page content blocks, flat, optionally one language
#[utoipa::path(
    get,
    path = "/api/about/blocks",
    tag = ABOUT_TAG,
    params(LanguageQuery),
    responses(
        (status = 200, description = "Blocks in position order", body = Vec<BlockDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_about_blocks(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let about_service = AboutPageService::new(&state.db, &state.languages);
    let page_id = about_service.page_id().await?;

    let block_service = ExtraContentService::new(&state.db, &state.languages);

    let blocks = block_service
        .list(OwnerType::AboutPage, page_id, query.language.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(blocks)))
}

/// About page blocks grouped into editor rows
#[utoipa::path(
    get,
    path = "/api/about/blocks/grouped",
    tag = ABOUT_TAG,
    responses(
        (status = 200, description = "Grouped block rows", body = Vec<BlockGroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_about_blocks_grouped(
    State(state): State<AppState>,
    _claims: AdminClaims,
) -> Result<impl IntoResponse, Error> {
    let about_service = AboutPageService::new(&state.db, &state.languages);
    let page_id = about_service.page_id().await?;

    let block_service = ExtraContentService::new(&state.db, &state.languages);

    let groups = block_service
        .list_grouped(OwnerType::AboutPage, page_id)
        .await?;

    Ok((StatusCode::OK, Json(groups)))
}

/// Attach a content block to the about page
#[utoipa::path(
    post,
    path = "/api/about/blocks",
    tag = ABOUT_TAG,
    request_body = SaveBlockDto,
    responses(
        (status = 201, description = "Block created", body = BlockDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_about_block(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<SaveBlockDto>,
) -> Result<impl IntoResponse, Error> {
    let about_service = AboutPageService::new(&state.db, &state.languages);
    let page_id = about_service.page_id().await?;

    let block_service = ExtraContentService::new(&state.db, &state.languages);

    let block = block_service
        .add(OwnerType::AboutPage, page_id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(block)))
}
