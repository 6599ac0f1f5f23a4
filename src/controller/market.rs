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
        content::{MarketContentDto, MarketDto, MarketSelectionDto, SaveMarketDto},
    },
    service::content::{MarketCompositionService, MarketService},
};

pub static MARKET_TAG: &str = "market";

/// List markets, localized when a language is requested
#[utoipa::path(
    get,
    path = "/api/markets",
    tag = MARKET_TAG,
    params(LanguageQuery),
    responses(
        (status = 200, description = "Markets in display order", body = Vec<MarketDto>),
        (status = 400, description = "Unsupported language", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_markets(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let market_service = MarketService::new(&state.db, &state.languages);

    let markets = market_service.list(query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(markets)))
}

/// Get one market by id
#[utoipa::path(
    get,
    path = "/api/markets/{id}",
    tag = MARKET_TAG,
    params(("id" = i32, Path, description = "Market id"), LanguageQuery),
    responses(
        (status = 200, description = "The market", body = MarketDto),
        (status = 404, description = "Market not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_market(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let market_service = MarketService::new(&state.db, &state.languages);

    let market = market_service.get(id, query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(market)))
}

/// Create a market with its full translation set
#[utoipa::path(
    post,
    path = "/api/markets",
    tag = MARKET_TAG,
    request_body = SaveMarketDto,
    responses(
        (status = 201, description = "Market created", body = MarketDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_market(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<SaveMarketDto>,
) -> Result<impl IntoResponse, Error> {
    let market_service = MarketService::new(&state.db, &state.languages);

    let market = market_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(market)))
}

/// Update a market's attributes and reconcile its translations
#[utoipa::path(
    put,
    path = "/api/markets/{id}",
    tag = MARKET_TAG,
    params(("id" = i32, Path, description = "Market id")),
    request_body = SaveMarketDto,
    responses(
        (status = 200, description = "Market updated", body = MarketDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Market not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_market(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<SaveMarketDto>,
) -> Result<impl IntoResponse, Error> {
    let market_service = MarketService::new(&state.db, &state.languages);

    let market = market_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(market)))
}

/// Delete a market with its translations and content associations
#[utoipa::path(
    delete,
    path = "/api/markets/{id}",
    tag = MARKET_TAG,
    params(("id" = i32, Path, description = "Market id")),
    responses(
        (status = 200, description = "Market deleted", body = MessageDto),
        (status = 404, description = "Market not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_market(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let market_service = MarketService::new(&state.db, &state.languages);

    market_service.delete(id, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Market deleted".to_string(),
        }),
    ))
}

/// Ordered content list of a market's public page
#[utoipa::path(
    get,
    path = "/api/markets/{id}/contents",
    tag = MARKET_TAG,
    params(("id" = i32, Path, description = "Market id")),
    responses(
        (status = 200, description = "Content rows in display order", body = Vec<MarketContentDto>),
        (status = 404, description = "Market not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_market_contents(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let composition_service = MarketCompositionService::new(&state.db);

    let contents = composition_service.get_contents(id).await?;

    Ok((StatusCode::OK, Json(contents)))
}

/// Replace a market's content selection
#[utoipa::path(
    put,
    path = "/api/markets/{id}/contents",
    tag = MARKET_TAG,
    params(("id" = i32, Path, description = "Market id")),
    request_body = MarketSelectionDto,
    responses(
        (status = 200, description = "Reconciled content rows", body = Vec<MarketContentDto>),
        (status = 404, description = "Market or referenced entity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn set_market_contents(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<MarketSelectionDto>,
) -> Result<impl IntoResponse, Error> {
    let composition_service = MarketCompositionService::new(&state.db);

    let contents = composition_service.set_contents(id, &payload).await?;

    Ok((StatusCode::OK, Json(contents)))
}
