//! Tests for the market endpoints, invoking the handlers directly with
//! extractor values.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fabrica::{
    controller::market::{create_market, delete_market, get_market, list_markets},
    model::{
        api::LanguageQuery,
        content::{SaveMarketDto, TranslationDto},
    },
};
use fabrica_test_utils::prelude::*;

use crate::util::{admin_claims, app_state};

fn save_dto(slug: &str) -> SaveMarketDto {
    SaveMarketDto {
        slug: slug.to_string(),
        position: 0,
        has_products: true,
        has_solutions: false,
        has_certificates: false,
        active: true,
        translations: ["tr", "en", "de", "fr"]
            .iter()
            .map(|language| TranslationDto {
                language: language.to_string(),
                name: format!("{slug}-{language}"),
                description: None,
                body: None,
            })
            .collect(),
    }
}

/// Tests that creating a market returns 201.
///
/// Expected: Ok with 201 Created
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let (state, _) = app_state(&test);

    let result = create_market(State(state), admin_claims(), Json(save_dto("automotive"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests that an invalid slug is a 400, not a server error.
///
/// Expected: Err rendering as 400 Bad Request
#[tokio::test]
async fn create_rejects_invalid_slug() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let (state, _) = app_state(&test);

    let result = create_market(
        State(state),
        admin_claims(),
        Json(save_dto("Not A Slug")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests the 404 for a missing market id.
///
/// Expected: Err rendering as 404 Not Found
#[tokio::test]
async fn get_missing_market_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let (state, _) = app_state(&test);

    let result = get_market(
        State(state),
        Path(42),
        Query(LanguageQuery { language: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests listing after create and deleting afterwards.
///
/// Expected: 200 on list, 200 on delete, then empty list
#[tokio::test]
async fn create_list_delete_flow() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let (state, _) = app_state(&test);

    create_market(
        State(state.clone()),
        admin_claims(),
        Json(save_dto("rail")),
    )
    .await
    .unwrap();

    let resp = list_markets(
        State(state.clone()),
        Query(LanguageQuery {
            language: Some("en".to_string()),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let market = fabrica::service::content::MarketService::new(&state.db, &state.languages)
        .get_by_slug("rail", None)
        .await
        .unwrap();

    let resp = delete_market(State(state.clone()), admin_claims(), Path(market.id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let markets = fabrica::service::content::MarketService::new(&state.db, &state.languages)
        .list(None)
        .await
        .unwrap();
    assert!(markets.is_empty());

    Ok(())
}
