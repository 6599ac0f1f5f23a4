use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260715_000001_market::Market, m20260715_000002_product_group::ProductGroup,
    m20260715_000003_product::Product, m20260715_000004_solution::Solution,
};

static FK_MARKET_CONTENT_MARKET_ID: &str = "fk_market_content_market_id";
static FK_MARKET_CONTENT_PRODUCT_GROUP_ID: &str = "fk_market_content_product_group_id";
static FK_MARKET_CONTENT_PRODUCT_ID: &str = "fk_market_content_product_id";
static FK_MARKET_CONTENT_SOLUTION_ID: &str = "fk_market_content_solution_id";
static IDX_MARKET_CONTENT_MARKET_ID: &str = "idx_market_content_market_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarketContent::Table)
                    .if_not_exists()
                    .col(pk_auto(MarketContent::Id))
                    .col(integer(MarketContent::MarketId))
                    .col(text(MarketContent::ContentType))
                    .col(integer_null(MarketContent::ProductGroupId))
                    .col(integer_null(MarketContent::ProductId))
                    .col(integer_null(MarketContent::SolutionId))
                    .col(string_null(MarketContent::DisplayName))
                    .col(string(MarketContent::TargetUrl))
                    .col(integer(MarketContent::Position))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MARKET_CONTENT_MARKET_ID)
                    .from_tbl(MarketContent::Table)
                    .from_col(MarketContent::MarketId)
                    .to_tbl(Market::Table)
                    .to_col(Market::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MARKET_CONTENT_PRODUCT_GROUP_ID)
                    .from_tbl(MarketContent::Table)
                    .from_col(MarketContent::ProductGroupId)
                    .to_tbl(ProductGroup::Table)
                    .to_col(ProductGroup::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MARKET_CONTENT_PRODUCT_ID)
                    .from_tbl(MarketContent::Table)
                    .from_col(MarketContent::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MARKET_CONTENT_SOLUTION_ID)
                    .from_tbl(MarketContent::Table)
                    .from_col(MarketContent::SolutionId)
                    .to_tbl(Solution::Table)
                    .to_col(Solution::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MARKET_CONTENT_MARKET_ID)
                    .table(MarketContent::Table)
                    .col(MarketContent::MarketId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MARKET_CONTENT_MARKET_ID)
                    .table(MarketContent::Table)
                    .to_owned(),
            )
            .await?;

        for fk in [
            FK_MARKET_CONTENT_SOLUTION_ID,
            FK_MARKET_CONTENT_PRODUCT_ID,
            FK_MARKET_CONTENT_PRODUCT_GROUP_ID,
            FK_MARKET_CONTENT_MARKET_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(MarketContent::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(MarketContent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MarketContent {
    Table,
    Id,
    MarketId,
    ContentType,
    ProductGroupId,
    ProductId,
    SolutionId,
    DisplayName,
    TargetUrl,
    Position,
}
