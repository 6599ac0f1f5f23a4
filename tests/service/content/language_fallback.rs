//! Tests for the translation read fallback chain: requested language,
//! default language, first available, slug as the last resort.

use fabrica::{
    model::content::{SaveMarketDto, TranslationDto},
    service::{content::MarketService, language::LanguageRegistry},
};
use fabrica_test_utils::prelude::*;

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

/// Tests the round trip: create with four languages, fetch with
/// `language=en`, and get the en fields back verbatim.
///
/// Expected: exactly the en translation
#[tokio::test]
async fn requested_language_round_trips() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = MarketService::new(&test.db, &languages);

    let market = service.create(&save_dto("automotive")).await.unwrap();
    let fetched = service.get(market.id, Some("en")).await.unwrap();

    assert_eq!(fetched.translations.len(), 1);
    assert_eq!(fetched.translations[0].language, "en");
    assert_eq!(fetched.translations[0].name, "automotive-en");

    Ok(())
}

/// Tests the fallback when the requested language has no row: the default
/// (first configured) language is served instead of an error.
///
/// Expected: the tr row
#[tokio::test]
async fn missing_language_falls_back_to_default() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    // Partial translation sets exist in legacy data; insert directly.
    let market = test.content().insert_market("rail").await?;
    test.content()
        .insert_market_translation(market.id, "tr", "rayli-sistemler")
        .await?;
    test.content()
        .insert_market_translation(market.id, "de", "schienenverkehr")
        .await?;

    let service = MarketService::new(&test.db, &languages);

    let fetched = service.get(market.id, Some("en")).await.unwrap();

    assert_eq!(fetched.translations.len(), 1);
    assert_eq!(fetched.translations[0].language, "tr");
    assert_eq!(fetched.translations[0].name, "rayli-sistemler");

    Ok(())
}

/// Tests the second fallback step: without the default language the
/// earliest configured available language wins.
///
/// Expected: the de row
#[tokio::test]
async fn fallback_skips_to_first_available() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let market = test.content().insert_market("marine").await?;
    test.content()
        .insert_market_translation(market.id, "fr", "marine-fr")
        .await?;
    test.content()
        .insert_market_translation(market.id, "de", "marine-de")
        .await?;

    let service = MarketService::new(&test.db, &languages);

    let fetched = service.get(market.id, Some("en")).await.unwrap();

    assert_eq!(fetched.translations[0].language, "de");

    Ok(())
}

/// Tests that an entity without any translations resolves to an empty set
/// rather than an error; the client falls back to the slug.
///
/// Expected: Ok with no translations
#[tokio::test]
async fn no_translations_is_not_an_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let market = test.content().insert_market("mining").await?;

    let service = MarketService::new(&test.db, &languages);

    let fetched = service.get(market.id, Some("en")).await.unwrap();

    assert!(fetched.translations.is_empty());
    assert_eq!(fetched.slug, "mining");

    Ok(())
}

/// Tests that a language outside the configured set is rejected instead of
/// silently falling back.
///
/// Expected: Err
#[tokio::test]
async fn unsupported_language_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let market = test.content().insert_market("energy").await?;

    let service = MarketService::new(&test.db, &languages);

    assert!(service.get(market.id, Some("es")).await.is_err());

    Ok(())
}
