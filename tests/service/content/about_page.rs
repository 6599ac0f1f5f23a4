//! Tests for the singleton about page: translation reconciliation and
//! content blocks shared with the solution block machinery.

use entity::extra_content::OwnerType;
use fabrica::{
    model::content::{SaveAboutPageDto, SaveBlockDto, TranslationDto},
    service::{
        content::{AboutPageService, ExtraContentService},
        language::LanguageRegistry,
    },
};
use fabrica_test_utils::prelude::*;

fn save_dto() -> SaveAboutPageDto {
    SaveAboutPageDto {
        translations: ["tr", "en", "de", "fr"]
            .iter()
            .map(|language| TranslationDto {
                language: language.to_string(),
                name: format!("about-{language}"),
                description: None,
                body: Some(format!("body-{language}")),
            })
            .collect(),
    }
}

/// Tests that the first update creates the singleton row with four
/// translations, and a second update reuses it.
///
/// Expected: same page id across updates, 4 translations
#[tokio::test]
async fn update_creates_then_reuses_singleton() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = AboutPageService::new(&test.db, &languages);

    let first = service.update(&save_dto()).await.unwrap();
    assert_eq!(first.translations.len(), 4);

    let mut dto = save_dto();
    for translation in &mut dto.translations {
        if translation.language == "en" {
            translation.body = Some("updated body".to_string());
        }
    }

    let second = service.update(&dto).await.unwrap();

    assert_eq!(first.id, second.id);
    let en = second
        .translations
        .iter()
        .find(|t| t.language == "en")
        .unwrap();
    assert_eq!(en.body.as_deref(), Some("updated body"));

    Ok(())
}

/// Tests that the about page title round-trips through the name field for
/// a localized read.
///
/// Expected: the de title
#[tokio::test]
async fn localized_read_returns_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = AboutPageService::new(&test.db, &languages);
    service.update(&save_dto()).await.unwrap();

    let page = service.get(Some("de")).await.unwrap();

    assert_eq!(page.translations.len(), 1);
    assert_eq!(page.translations[0].name, "about-de");

    Ok(())
}

/// Tests that blocks attach to the about page through the same machinery
/// as solution blocks.
///
/// Expected: one grouped row on the about page
#[tokio::test]
async fn blocks_attach_to_about_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let about_service = AboutPageService::new(&test.db, &languages);
    let page_id = about_service.page_id().await.unwrap();

    let block_service = ExtraContentService::new(&test.db, &languages);

    block_service
        .add(
            OwnerType::AboutPage,
            page_id,
            &SaveBlockDto {
                language: "tr".to_string(),
                position: None,
                block_type: "mixed".to_string(),
                title: "tarihce".to_string(),
                payload: "<p>1962'den beri</p>".to_string(),
            },
        )
        .await
        .unwrap();

    let groups = block_service
        .list_grouped(OwnerType::AboutPage, page_id)
        .await
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert!(groups[0].cells[0].block.is_some());

    Ok(())
}
