use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, LanguageQuery, MessageDto},
        app::AppState,
        auth::AdminClaims,
        content::{CatalogDto, ProductDto, SaveProductDto},
    },
    service::content::{CatalogService, ProductService},
};

pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ProductListQuery {
    pub language: Option<String>,
    /// Narrow the listing to one product group
    pub product_group_id: Option<i32>,
}

/// List products, optionally narrowed to one group
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(ProductListQuery),
    responses(
        (status = 200, description = "Products in display order", body = Vec<ProductDto>),
        (status = 400, description = "Unsupported language", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.languages);

    let products = product_service
        .list(query.product_group_id, query.language.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(products)))
}

/// Get one product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.languages);

    let product = product_service.get(id, query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(product)))
}

/// Create a product under a group
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = SaveProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Product group not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<SaveProductDto>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.languages);

    let product = product_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body = SaveProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_product(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<SaveProductDto>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.languages);

    let product = product_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(product)))
}

/// Delete a product, its translations and catalogs
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db, &state.languages);

    product_service.delete(id, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Product deleted".to_string(),
        }),
    ))
}

/// Catalogs attached to a product
#[utoipa::path(
    get,
    path = "/api/products/{id}/catalogs",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product's catalogs", body = Vec<CatalogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_product_catalogs(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db, &state.languages);

    let catalogs = catalog_service.list_by_product(id).await?;

    Ok((StatusCode::OK, Json(catalogs)))
}
