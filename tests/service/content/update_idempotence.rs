//! Tests that updates reconcile translations instead of recreating them,
//! and that applying the same payload twice changes nothing observable.

use fabrica::{
    model::content::{SaveMarketDto, TranslationDto},
    service::{content::MarketService, language::LanguageRegistry},
};
use fabrica_test_utils::prelude::*;
use sea_orm::EntityTrait;

fn save_dto(slug: &str) -> SaveMarketDto {
    SaveMarketDto {
        slug: slug.to_string(),
        position: 0,
        has_products: true,
        has_solutions: true,
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

/// Tests that updating twice with the same payload leaves the same row
/// count and the same row ids.
///
/// Expected: 4 translation rows with stable ids
#[tokio::test]
async fn same_payload_twice_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = MarketService::new(&test.db, &languages);

    let market = service.create(&save_dto("automotive")).await.unwrap();

    let dto = save_dto("automotive");
    service.update(market.id, &dto).await.unwrap();

    let after_first = entity::prelude::MarketTranslation::find()
        .all(&test.db)
        .await?;

    service.update(market.id, &dto).await.unwrap();

    let after_second = entity::prelude::MarketTranslation::find()
        .all(&test.db)
        .await?;

    assert_eq!(after_first.len(), 4);
    assert_eq!(after_second.len(), 4);

    let mut first_ids: Vec<i32> = after_first.iter().map(|t| t.id).collect();
    let mut second_ids: Vec<i32> = after_second.iter().map(|t| t.id).collect();
    first_ids.sort_unstable();
    second_ids.sort_unstable();
    assert_eq!(first_ids, second_ids);

    Ok(())
}

/// Tests that an update payload must still cover every configured
/// language; omitting one cannot silently destroy that language's row.
///
/// Expected: Err, all 4 rows still present
#[tokio::test]
async fn partial_payload_cannot_destroy_translations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = MarketService::new(&test.db, &languages);

    let market = service.create(&save_dto("rail")).await.unwrap();

    let mut dto = save_dto("rail");
    dto.translations.retain(|t| t.language != "de");

    assert!(service.update(market.id, &dto).await.is_err());

    let rows = entity::prelude::MarketTranslation::find()
        .all(&test.db)
        .await?;
    assert_eq!(rows.len(), 4);

    Ok(())
}

/// Tests that updated translation content lands while untouched languages
/// stay byte-identical.
///
/// Expected: en updated, tr unchanged
#[tokio::test]
async fn update_changes_only_submitted_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = MarketService::new(&test.db, &languages);

    let market = service.create(&save_dto("energy")).await.unwrap();

    let mut dto = save_dto("energy");
    for translation in &mut dto.translations {
        if translation.language == "en" {
            translation.name = "renewable energy".to_string();
        }
    }

    let updated = service.update(market.id, &dto).await.unwrap();

    let en = updated
        .translations
        .iter()
        .find(|t| t.language == "en")
        .unwrap();
    let tr = updated
        .translations
        .iter()
        .find(|t| t.language == "tr")
        .unwrap();

    assert_eq!(en.name, "renewable energy");
    assert_eq!(tr.name, "energy-tr");

    Ok(())
}

/// Tests that changing the slug to one already in use is rejected.
///
/// Expected: Err(SlugTaken)
#[tokio::test]
async fn update_rejects_taken_slug() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = MarketService::new(&test.db, &languages);

    service.create(&save_dto("automotive")).await.unwrap();
    let other = service.create(&save_dto("marine")).await.unwrap();

    let dto = save_dto("automotive");

    assert!(service.update(other.id, &dto).await.is_err());

    Ok(())
}
