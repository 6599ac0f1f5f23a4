use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use entity::extra_content::OwnerType;

use crate::{
    error::{content::ContentError, Error},
    model::{
        api::{ErrorDto, LanguageQuery, MessageDto},
        app::AppState,
        auth::AdminClaims,
        content::{BlockDto, BlockGroupDto, SaveBlockDto, SaveSolutionDto, SolutionDto},
    },
    service::content::{ExtraContentService, SolutionService},
};

pub static SOLUTION_TAG: &str = "solution";

/// List solutions
#[utoipa::path(
    get,
    path = "/api/solutions",
    tag = SOLUTION_TAG,
    params(LanguageQuery),
    responses(
        (status = 200, description = "Solutions in display order", body = Vec<SolutionDto>),
        (status = 400, description = "Unsupported language", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_solutions(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let solution_service = SolutionService::new(&state.db, &state.languages);

    let solutions = solution_service.list(query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(solutions)))
}

/// Get one solution by id
#[utoipa::path(
    get,
    path = "/api/solutions/{id}",
    tag = SOLUTION_TAG,
    params(("id" = i32, Path, description = "Solution id"), LanguageQuery),
    responses(
        (status = 200, description = "The solution", body = SolutionDto),
        (status = 404, description = "Solution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_solution(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let solution_service = SolutionService::new(&state.db, &state.languages);

    let solution = solution_service.get(id, query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(solution)))
}

/// Public solution detail lookup by slug
#[utoipa::path(
    get,
    path = "/api/solutions/slug/{slug}",
    tag = SOLUTION_TAG,
    params(("slug" = String, Path, description = "Solution slug"), LanguageQuery),
    responses(
        (status = 200, description = "The solution", body = SolutionDto),
        (status = 404, description = "Solution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_solution_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let solution_service = SolutionService::new(&state.db, &state.languages);

    let solution = solution_service
        .get_by_slug(&slug, query.language.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(solution)))
}

/// Create a solution
#[utoipa::path(
    post,
    path = "/api/solutions",
    tag = SOLUTION_TAG,
    request_body = SaveSolutionDto,
    responses(
        (status = 201, description = "Solution created", body = SolutionDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_solution(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<SaveSolutionDto>,
) -> Result<impl IntoResponse, Error> {
    let solution_service = SolutionService::new(&state.db, &state.languages);

    let solution = solution_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(solution)))
}

/// Update a solution
#[utoipa::path(
    put,
    path = "/api/solutions/{id}",
    tag = SOLUTION_TAG,
    params(("id" = i32, Path, description = "Solution id")),
    request_body = SaveSolutionDto,
    responses(
        (status = 200, description = "Solution updated", body = SolutionDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Solution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_solution(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<SaveSolutionDto>,
) -> Result<impl IntoResponse, Error> {
    let solution_service = SolutionService::new(&state.db, &state.languages);

    let solution = solution_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(solution)))
}

/// Delete a solution with its translations and content blocks
#[utoipa::path(
    delete,
    path = "/api/solutions/{id}",
    tag = SOLUTION_TAG,
    params(("id" = i32, Path, description = "Solution id")),
    responses(
        (status = 200, description = "Solution deleted", body = MessageDto),
        (status = 404, description = "Solution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_solution(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let solution_service = SolutionService::new(&state.db, &state.languages);

    solution_service.delete(id, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Solution deleted".to_string(),
        }),
    ))
}

/// Extra content blocks of a solution, flat, optionally one language
#[utoipa::path(
    get,
    path = "/api/solutions/{id}/blocks",
    tag = SOLUTION_TAG,
    params(("id" = i32, Path, description = "Solution id"), LanguageQuery),
    responses(
        (status = 200, description = "Blocks in position order", body = Vec<BlockDto>),
        (status = 404, description = "Solution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_solution_blocks(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    ensure_solution_exists(&state, id).await?;

    let block_service = ExtraContentService::new(&state.db, &state.languages);

    let blocks = block_service
        .list(OwnerType::Solution, id, query.language.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(blocks)))
}

/// Blocks grouped into editor rows, all languages side by side
#[utoipa::path(
    get,
    path = "/api/solutions/{id}/blocks/grouped",
    tag = SOLUTION_TAG,
    params(("id" = i32, Path, description = "Solution id")),
    responses(
        (status = 200, description = "Grouped block rows", body = Vec<BlockGroupDto>),
        (status = 404, description = "Solution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_solution_blocks_grouped(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ensure_solution_exists(&state, id).await?;

    let block_service = ExtraContentService::new(&state.db, &state.languages);

    let groups = block_service.list_grouped(OwnerType::Solution, id).await?;

    Ok((StatusCode::OK, Json(groups)))
}

/// Attach a content block to a solution
#[utoipa::path(
    post,
    path = "/api/solutions/{id}/blocks",
    tag = SOLUTION_TAG,
    params(("id" = i32, Path, description = "Solution id")),
    request_body = SaveBlockDto,
    responses(
        (status = 201, description = "Block created", body = BlockDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Solution not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_solution_block(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<SaveBlockDto>,
) -> Result<impl IntoResponse, Error> {
    ensure_solution_exists(&state, id).await?;

    let block_service = ExtraContentService::new(&state.db, &state.languages);

    let block = block_service.add(OwnerType::Solution, id, &payload).await?;

    Ok((StatusCode::CREATED, Json(block)))
}

async fn ensure_solution_exists(state: &AppState, id: i32) -> Result<(), Error> {
    crate::data::content::SolutionRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(ContentError::NotFound {
            entity: "Solution",
            id,
        })?;

    Ok(())
}
