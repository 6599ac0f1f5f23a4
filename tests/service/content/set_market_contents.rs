//! Tests for MarketCompositionService::set_contents.
//!
//! Verifies that a market's content selection materializes into the
//! expected association rows with slug-derived target URLs, and that
//! re-submitting a selection reconciles instead of recreating rows.

use fabrica::{
    model::content::MarketSelectionDto,
    service::content::MarketCompositionService,
};
use fabrica_test_utils::prelude::*;
use sea_orm::EntityTrait;

fn selection(groups: Vec<i32>, products: Vec<i32>, solutions: Vec<i32>) -> MarketSelectionDto {
    MarketSelectionDto {
        product_group_ids: groups,
        product_ids: products,
        solution_ids: solutions,
        include_certificates: false,
    }
}

/// Tests that a selection of two groups, one product and one solution
/// produces exactly four rows with the documented target URLs.
///
/// Expected: Ok with 4 rows in selection order
#[tokio::test]
async fn produces_rows_with_computed_urls() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let market = test.content().insert_market("automotive").await?;
    let fasteners = test.content().insert_product_group("fasteners").await?;
    let housings = test.content().insert_product_group("housings").await?;
    let bolt = test.content().insert_product(fasteners.id, "bolt-m8").await?;
    let welding = test.content().insert_solution("welding").await?;

    let service = MarketCompositionService::new(&test.db);

    let contents = service
        .set_contents(
            market.id,
            &selection(vec![fasteners.id, housings.id], vec![bolt.id], vec![welding.id]),
        )
        .await
        .unwrap();

    assert_eq!(contents.len(), 4);

    assert_eq!(contents[0].target_url, "/products/fasteners");
    assert_eq!(contents[0].product_group_id, Some(fasteners.id));
    assert_eq!(contents[1].target_url, "/products/housings");
    assert_eq!(contents[2].target_url, "/products/fasteners/bolt-m8");
    assert_eq!(contents[2].product_id, Some(bolt.id));
    assert_eq!(contents[3].target_url, "/solutions/welding");
    assert_eq!(contents[3].solution_id, Some(welding.id));

    let positions: Vec<i32> = contents.iter().map(|c| c.position).collect();
    assert_eq!(positions, [0, 1, 2, 3]);

    Ok(())
}

/// Tests the certificates toggle appends an anchor row last.
///
/// Expected: Ok with a trailing certificate row
#[tokio::test]
async fn certificates_toggle_appends_anchor() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let market = test.content().insert_market("rail").await?;
    let group = test.content().insert_product_group("brakes").await?;

    let service = MarketCompositionService::new(&test.db);

    let mut dto = selection(vec![group.id], vec![], vec![]);
    dto.include_certificates = true;

    let contents = service.set_contents(market.id, &dto).await.unwrap();

    assert_eq!(contents.len(), 2);
    assert_eq!(contents[1].content_type, "certificate");
    assert_eq!(contents[1].target_url, "/certificates#rail");

    Ok(())
}

/// Tests that re-submitting the same selection keeps row identity.
///
/// Expected: same ids before and after the second call
#[tokio::test]
async fn resubmitting_selection_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let market = test.content().insert_market("energy").await?;
    let group = test.content().insert_product_group("turbines").await?;
    let solution = test.content().insert_solution("coating").await?;

    let service = MarketCompositionService::new(&test.db);
    let dto = selection(vec![group.id], vec![], vec![solution.id]);

    let first = service.set_contents(market.id, &dto).await.unwrap();
    let second = service.set_contents(market.id, &dto).await.unwrap();

    let first_ids: Vec<i32> = first.iter().map(|c| c.id).collect();
    let second_ids: Vec<i32> = second.iter().map(|c| c.id).collect();

    assert_eq!(first_ids, second_ids);
    assert_eq!(second.len(), 2);

    Ok(())
}

/// Tests that entities dropped from the selection lose their rows while
/// kept entities retain theirs.
///
/// Expected: stale row gone, kept row id unchanged
#[tokio::test]
async fn reconciles_removed_and_kept_entries() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let market = test.content().insert_market("marine").await?;
    let group_a = test.content().insert_product_group("pumps").await?;
    let group_b = test.content().insert_product_group("valves").await?;

    let service = MarketCompositionService::new(&test.db);

    let first = service
        .set_contents(market.id, &selection(vec![group_a.id, group_b.id], vec![], vec![]))
        .await
        .unwrap();
    let kept_id = first
        .iter()
        .find(|c| c.product_group_id == Some(group_a.id))
        .unwrap()
        .id;

    let second = service
        .set_contents(market.id, &selection(vec![group_a.id], vec![], vec![]))
        .await
        .unwrap();

    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, kept_id);
    assert_eq!(second[0].product_group_id, Some(group_a.id));

    Ok(())
}

/// Tests that an unknown referenced id fails the whole call and persists
/// nothing.
///
/// Expected: Err, existing rows untouched
#[tokio::test]
async fn unknown_reference_persists_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let market = test.content().insert_market("mining").await?;
    let group = test.content().insert_product_group("drills").await?;

    let service = MarketCompositionService::new(&test.db);

    service
        .set_contents(market.id, &selection(vec![group.id], vec![], vec![]))
        .await
        .unwrap();

    let result = service
        .set_contents(market.id, &selection(vec![group.id, 9999], vec![], vec![]))
        .await;

    assert!(result.is_err());

    let contents = service.get_contents(market.id).await.unwrap();
    assert_eq!(contents.len(), 1);

    Ok(())
}

/// Tests that deleting the market removes its content rows through the
/// foreign key.
///
/// Expected: zero rows after the delete
#[tokio::test]
async fn market_delete_cascades_to_contents() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let market = test.content().insert_market("defense").await?;
    let group = test.content().insert_product_group("armor").await?;

    let service = MarketCompositionService::new(&test.db);
    service
        .set_contents(market.id, &selection(vec![group.id], vec![], vec![]))
        .await
        .unwrap();

    entity::prelude::Market::delete_by_id(market.id)
        .exec(&test.db)
        .await?;

    let rows = entity::prelude::MarketContent::find().all(&test.db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests that the contents of a missing market are a not-found error.
///
/// Expected: Err
#[tokio::test]
async fn missing_market_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let service = MarketCompositionService::new(&test.db);

    assert!(service.get_contents(123).await.is_err());

    Ok(())
}
