use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, LanguageQuery, MessageDto},
        app::AppState,
        auth::AdminClaims,
        content::{ProductGroupDto, SaveProductGroupDto},
    },
    service::content::ProductGroupService,
};

pub static PRODUCT_GROUP_TAG: &str = "product-group";

/// List product groups
#[utoipa::path(
    get,
    path = "/api/product-groups",
    tag = PRODUCT_GROUP_TAG,
    params(LanguageQuery),
    responses(
        (status = 200, description = "Groups in display order", body = Vec<ProductGroupDto>),
        (status = 400, description = "Unsupported language", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_product_groups(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let group_service = ProductGroupService::new(&state.db, &state.languages);

    let groups = group_service.list(query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(groups)))
}

/// Get one product group by id
#[utoipa::path(
    get,
    path = "/api/product-groups/{id}",
    tag = PRODUCT_GROUP_TAG,
    params(("id" = i32, Path, description = "Product group id"), LanguageQuery),
    responses(
        (status = 200, description = "The group", body = ProductGroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let group_service = ProductGroupService::new(&state.db, &state.languages);

    let group = group_service.get(id, query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(group)))
}

/// Create a product group
#[utoipa::path(
    post,
    path = "/api/product-groups",
    tag = PRODUCT_GROUP_TAG,
    request_body = SaveProductGroupDto,
    responses(
        (status = 201, description = "Group created", body = ProductGroupDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_product_group(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<SaveProductGroupDto>,
) -> Result<impl IntoResponse, Error> {
    let group_service = ProductGroupService::new(&state.db, &state.languages);

    let group = group_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(group)))
}

/// Update a product group
#[utoipa::path(
    put,
    path = "/api/product-groups/{id}",
    tag = PRODUCT_GROUP_TAG,
    params(("id" = i32, Path, description = "Product group id")),
    request_body = SaveProductGroupDto,
    responses(
        (status = 200, description = "Group updated", body = ProductGroupDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_product_group(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<SaveProductGroupDto>,
) -> Result<impl IntoResponse, Error> {
    let group_service = ProductGroupService::new(&state.db, &state.languages);

    let group = group_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(group)))
}

/// Delete a product group and everything under it
#[utoipa::path(
    delete,
    path = "/api/product-groups/{id}",
    tag = PRODUCT_GROUP_TAG,
    params(("id" = i32, Path, description = "Product group id")),
    responses(
        (status = 200, description = "Group deleted", body = MessageDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_product_group(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let group_service = ProductGroupService::new(&state.db, &state.languages);

    group_service.delete(id, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Product group deleted".to_string(),
        }),
    ))
}
