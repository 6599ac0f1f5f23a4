use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::market_content::ContentType;

use crate::{
    data::content::{
        market_content::ContentRow, MarketContentRepository, MarketRepository, ProductGroupRepository,
        ProductRepository, SolutionRepository,
    },
    error::{content::ContentError, Error},
    model::content::{MarketContentDto, MarketSelectionDto},
};

/// Composes the ordered, navigable content list of a market from the
/// admin's selection of product groups, products and solutions.
///
/// Updates are set-reconciliations: rows pointing at entities still in the
/// selection keep their identity (and any display-name override), rows that
/// dropped out are deleted and new selections are inserted, all in one
/// transaction. The typed foreign key is always persisted; the target URL
/// is derived output, never parsed back.
pub struct MarketCompositionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarketCompositionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_contents(&self, market_id: i32) -> Result<Vec<MarketContentDto>, Error> {
        MarketRepository::new(self.db)
            .get_by_id(market_id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Market",
                id: market_id,
            })?;

        let rows = MarketContentRepository::new(self.db)
            .list_by_market(market_id)
            .await?;

        Ok(rows.into_iter().map(to_dto).collect())
    }

    pub async fn set_contents(
        &self,
        market_id: i32,
        selection: &MarketSelectionDto,
    ) -> Result<Vec<MarketContentDto>, Error> {
        let market = MarketRepository::new(self.db)
            .get_by_id(market_id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Market",
                id: market_id,
            })?;

        let desired = self.build_rows(&market, selection).await?;

        let existing = MarketContentRepository::new(self.db)
            .list_by_market(market_id)
            .await?;

        let txn = self.db.begin().await?;

        {
            let content_repo = MarketContentRepository::new(&txn);
            let mut unmatched = existing;

            for row in &desired {
                match unmatched.iter().position(|model| key_of(model) == row.key()) {
                    Some(index) => {
                        let model = unmatched.swap_remove(index);
                        content_repo.update_existing(model, row).await?;
                    }
                    None => {
                        content_repo.insert(market_id, row).await?;
                    }
                }
            }

            for stale in unmatched {
                content_repo.delete(stale.id).await?;
            }
        }

        txn.commit().await?;

        self.get_contents(market_id).await
    }

    /// Builds the desired rows in selection order: groups, products,
    /// solutions, then the certificates anchor.
    async fn build_rows(
        &self,
        market: &entity::market::Model,
        selection: &MarketSelectionDto,
    ) -> Result<Vec<ContentRow>, Error> {
        let mut rows = Vec::new();
        let mut position = 0;

        let group_repo = ProductGroupRepository::new(self.db);

        let groups = group_repo.get_by_ids(&selection.product_group_ids).await?;
        let groups_by_id: HashMap<i32, &entity::product_group::Model> =
            groups.iter().map(|g| (g.id, g)).collect();

        for group_id in &selection.product_group_ids {
            let group = groups_by_id.get(group_id).ok_or(ContentError::NotFound {
                entity: "Product group",
                id: *group_id,
            })?;

            rows.push(ContentRow {
                content_type: ContentType::ProductGroup,
                product_group_id: Some(group.id),
                product_id: None,
                solution_id: None,
                display_name: None,
                target_url: format!("/products/{}", group.slug),
                position,
            });
            position += 1;
        }

        let products = ProductRepository::new(self.db)
            .get_by_ids(&selection.product_ids)
            .await?;
        let products_by_id: HashMap<i32, &entity::product::Model> =
            products.iter().map(|p| (p.id, p)).collect();

        // Product URLs are nested under their group's slug; load the groups
        // of selected products that were not part of the group selection.
        let product_group_ids: Vec<i32> = products
            .iter()
            .map(|p| p.product_group_id)
            .filter(|id| !groups_by_id.contains_key(id))
            .collect();
        let product_groups = group_repo.get_by_ids(&product_group_ids).await?;

        let mut group_slugs: HashMap<i32, &str> = groups_by_id
            .iter()
            .map(|(id, g)| (*id, g.slug.as_str()))
            .collect();
        group_slugs.extend(product_groups.iter().map(|g| (g.id, g.slug.as_str())));

        for product_id in &selection.product_ids {
            let product = products_by_id.get(product_id).ok_or(ContentError::NotFound {
                entity: "Product",
                id: *product_id,
            })?;

            let group_slug =
                group_slugs
                    .get(&product.product_group_id)
                    .ok_or(ContentError::NotFound {
                        entity: "Product group",
                        id: product.product_group_id,
                    })?;

            rows.push(ContentRow {
                content_type: ContentType::Product,
                product_group_id: None,
                product_id: Some(product.id),
                solution_id: None,
                display_name: None,
                target_url: format!("/products/{}/{}", group_slug, product.slug),
                position,
            });
            position += 1;
        }

        let solutions = SolutionRepository::new(self.db)
            .get_by_ids(&selection.solution_ids)
            .await?;
        let solutions_by_id: HashMap<i32, &entity::solution::Model> =
            solutions.iter().map(|s| (s.id, s)).collect();

        for solution_id in &selection.solution_ids {
            let solution = solutions_by_id
                .get(solution_id)
                .ok_or(ContentError::NotFound {
                    entity: "Solution",
                    id: *solution_id,
                })?;

            rows.push(ContentRow {
                content_type: ContentType::Solution,
                product_group_id: None,
                product_id: None,
                solution_id: Some(solution.id),
                display_name: None,
                target_url: format!("/solutions/{}", solution.slug),
                position,
            });
            position += 1;
        }

        if selection.include_certificates {
            rows.push(ContentRow {
                content_type: ContentType::Certificate,
                product_group_id: None,
                product_id: None,
                solution_id: None,
                display_name: None,
                target_url: format!("/certificates#{}", market.slug),
                position,
            });
        }

        Ok(rows)
    }
}

fn key_of(
    model: &entity::market_content::Model,
) -> (ContentType, Option<i32>, Option<i32>, Option<i32>) {
    (
        model.content_type,
        model.product_group_id,
        model.product_id,
        model.solution_id,
    )
}

pub(crate) fn content_type_label(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::ProductGroup => "product_group",
        ContentType::Product => "product",
        ContentType::Solution => "solution",
        ContentType::Certificate => "certificate",
    }
}

fn to_dto(model: entity::market_content::Model) -> MarketContentDto {
    MarketContentDto {
        id: model.id,
        market_id: model.market_id,
        content_type: content_type_label(model.content_type).to_string(),
        product_group_id: model.product_group_id,
        product_id: model.product_id,
        solution_id: model.solution_id,
        display_name: model.display_name,
        target_url: model.target_url,
        position: model.position,
    }
}
