//! Tests for extra content block flows: appending, grouping for the admin
//! editor and deleting one editor row across languages.

use entity::extra_content::OwnerType;
use fabrica::{
    model::content::SaveBlockDto,
    service::{content::ExtraContentService, language::LanguageRegistry},
};
use fabrica_test_utils::prelude::*;

fn block_dto(language: &str, position: Option<i32>, block_type: &str) -> SaveBlockDto {
    SaveBlockDto {
        language: language.to_string(),
        position,
        block_type: block_type.to_string(),
        title: format!("title-{language}"),
        payload: match block_type {
            "table" => r#"{"columns":["a"],"rows":[["1"]]}"#.to_string(),
            "list" => r#"["first","second"]"#.to_string(),
            _ => "plain text".to_string(),
        },
    }
}

/// Tests the documented grouping scenario: blocks at positions 1 (tr, en)
/// and 2 (tr) become two rows with blank cells for absent languages.
///
/// Expected: 2 rows, stable numbering
#[tokio::test]
async fn grouping_matches_documented_scenario() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();
    let solution = test.content().insert_solution("welding").await?;

    let service = ExtraContentService::new(&test.db, &languages);

    service
        .add(OwnerType::Solution, solution.id, &block_dto("tr", Some(1), "text"))
        .await
        .unwrap();
    service
        .add(OwnerType::Solution, solution.id, &block_dto("en", Some(1), "text"))
        .await
        .unwrap();
    service
        .add(OwnerType::Solution, solution.id, &block_dto("tr", Some(2), "text"))
        .await
        .unwrap();

    let groups = service
        .list_grouped(OwnerType::Solution, solution.id)
        .await
        .unwrap();

    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].position, 1);
    assert!(groups[0].cells[0].block.is_some()); // tr
    assert!(groups[0].cells[1].block.is_some()); // en
    assert!(groups[0].cells[2].block.is_none()); // de
    assert!(groups[0].cells[3].block.is_none()); // fr

    assert_eq!(groups[1].position, 2);
    assert!(groups[1].cells[0].block.is_some());
    assert!(groups[1].cells[1].block.is_none());

    Ok(())
}

/// Tests that omitting the position appends after the highest used slot.
///
/// Expected: positions 1 then 2
#[tokio::test]
async fn omitted_position_appends() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();
    let solution = test.content().insert_solution("casting").await?;

    let service = ExtraContentService::new(&test.db, &languages);

    let first = service
        .add(OwnerType::Solution, solution.id, &block_dto("tr", None, "text"))
        .await
        .unwrap();
    let second = service
        .add(OwnerType::Solution, solution.id, &block_dto("tr", None, "text"))
        .await
        .unwrap();

    assert_eq!(first.position, 1);
    assert_eq!(second.position, 2);

    Ok(())
}

/// Tests payload validation: table and list payloads must be JSON, text
/// payloads are free-form, unknown types are rejected.
#[tokio::test]
async fn payload_validation_by_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();
    let solution = test.content().insert_solution("forging").await?;

    let service = ExtraContentService::new(&test.db, &languages);

    let ok_table = service
        .add(OwnerType::Solution, solution.id, &block_dto("tr", Some(1), "table"))
        .await;
    assert!(ok_table.is_ok());

    let mut broken_table = block_dto("en", Some(1), "table");
    broken_table.payload = "not json".to_string();
    assert!(service
        .add(OwnerType::Solution, solution.id, &broken_table)
        .await
        .is_err());

    let unknown = SaveBlockDto {
        block_type: "video".to_string(),
        ..block_dto("en", Some(1), "text")
    };
    assert!(service
        .add(OwnerType::Solution, solution.id, &unknown)
        .await
        .is_err());

    let bad_language = block_dto("es", Some(1), "text");
    assert!(service
        .add(OwnerType::Solution, solution.id, &bad_language)
        .await
        .is_err());

    Ok(())
}

/// Tests that deleting one editor row removes exactly the captured ids
/// across languages and leaves other rows alone.
///
/// Expected: first slot gone, second slot intact
#[tokio::test]
async fn delete_group_removes_one_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let languages = LanguageRegistry::default();
    let solution = test.content().insert_solution("machining").await?;

    let service = ExtraContentService::new(&test.db, &languages);

    let mut slot_one = Vec::new();
    for language in ["tr", "en", "de", "fr"] {
        let block = service
            .add(OwnerType::Solution, solution.id, &block_dto(language, Some(1), "text"))
            .await
            .unwrap();
        slot_one.push(block.id);
    }
    service
        .add(OwnerType::Solution, solution.id, &block_dto("tr", Some(2), "text"))
        .await
        .unwrap();

    let removed = service.delete_group(&slot_one).await.unwrap();
    assert_eq!(removed, 4);

    let groups = service
        .list_grouped(OwnerType::Solution, solution.id)
        .await
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].position, 2);

    Ok(())
}
