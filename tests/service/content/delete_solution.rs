//! Tests for the solution lifecycle: create with a full translation set,
//! attach content blocks, delete everything in one logical operation.

use entity::extra_content::OwnerType;
use fabrica::{
    model::content::{SaveBlockDto, SaveSolutionDto, TranslationDto},
    service::{
        content::{ExtraContentService, SolutionService},
        language::LanguageRegistry,
        storage::FileStorage,
    },
};
use fabrica_test_utils::prelude::*;
use sea_orm::EntityTrait;

fn save_dto(slug: &str) -> SaveSolutionDto {
    SaveSolutionDto {
        slug: slug.to_string(),
        position: 0,
        active: true,
        translations: ["tr", "en", "de", "fr"]
            .iter()
            .map(|language| TranslationDto {
                language: language.to_string(),
                name: format!("{slug}-{language}"),
                description: Some(format!("description-{language}")),
                body: None,
            })
            .collect(),
    }
}

fn block_dto(language: &str, position: i32) -> SaveBlockDto {
    SaveBlockDto {
        language: language.to_string(),
        position: Some(position),
        block_type: "text".to_string(),
        title: format!("block-{language}"),
        payload: "Some localized paragraph".to_string(),
    }
}

/// Tests that creating a solution with four translations persists the
/// parent row and exactly four translation rows.
///
/// Expected: Ok with slug set and 4 translations
#[tokio::test]
async fn create_persists_parent_and_translations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = SolutionService::new(&test.db, &languages);

    let solution = service.create(&save_dto("welding")).await.unwrap();

    assert_eq!(solution.slug, "welding");
    assert_eq!(solution.translations.len(), 4);

    let rows = entity::prelude::SolutionTranslation::find()
        .all(&test.db)
        .await?;
    assert_eq!(rows.len(), 4);

    Ok(())
}

/// Tests that creating with an incomplete translation set is rejected
/// server-side before anything is persisted.
///
/// Expected: Err, no rows
#[tokio::test]
async fn create_rejects_incomplete_translations() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = SolutionService::new(&test.db, &languages);

    let mut dto = save_dto("welding");
    dto.translations.pop();

    assert!(service.create(&dto).await.is_err());

    let rows = entity::prelude::Solution::find().all(&test.db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests that a duplicate language in the payload is rejected.
///
/// Expected: Err, no rows
#[tokio::test]
async fn create_rejects_duplicate_language() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = SolutionService::new(&test.db, &languages);

    let mut dto = save_dto("welding");
    dto.translations[3].language = "en".to_string();

    assert!(service.create(&dto).await.is_err());

    Ok(())
}

/// Tests that deleting a solution removes its translations and its extra
/// content blocks, leaving no residue.
///
/// Expected: zero translation rows and zero blocks for the deleted id
#[tokio::test]
async fn delete_removes_translations_and_blocks() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();
    let storage = FileStorage::new(test.upload_dir.path());

    let solution_service = SolutionService::new(&test.db, &languages);
    let block_service = ExtraContentService::new(&test.db, &languages);

    let solution = solution_service.create(&save_dto("welding")).await.unwrap();

    for language in ["tr", "en", "de", "fr"] {
        block_service
            .add(OwnerType::Solution, solution.id, &block_dto(language, 1))
            .await
            .unwrap();
    }

    // A second solution's blocks must survive the delete
    let other = solution_service.create(&save_dto("casting")).await.unwrap();
    block_service
        .add(OwnerType::Solution, other.id, &block_dto("tr", 1))
        .await
        .unwrap();

    solution_service
        .delete(solution.id, &storage)
        .await
        .unwrap();

    let translations = entity::prelude::SolutionTranslation::find()
        .all(&test.db)
        .await?;
    assert!(translations.iter().all(|t| t.solution_id != solution.id));

    let blocks = entity::prelude::ExtraContent::find().all(&test.db).await?;
    assert!(blocks.iter().all(|b| b.owner_id != solution.id));
    assert_eq!(blocks.len(), 1);

    Ok(())
}

/// Tests slug lookups used by the public site.
///
/// Expected: Ok for an existing slug, Err otherwise
#[tokio::test]
async fn get_by_slug_resolves() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();

    let service = SolutionService::new(&test.db, &languages);
    service.create(&save_dto("welding")).await.unwrap();

    let found = service.get_by_slug("welding", Some("en")).await.unwrap();
    assert_eq!(found.translations.len(), 1);
    assert_eq!(found.translations[0].language, "en");

    assert!(service.get_by_slug("missing", None).await.is_err());

    Ok(())
}
