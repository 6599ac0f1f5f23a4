use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260715_000002_product_group::ProductGroup;

static FK_PRODUCT_PRODUCT_GROUP_ID: &str = "fk_product_product_group_id";
static FK_PRODUCT_TRANSLATION_PRODUCT_ID: &str = "fk_product_translation_product_id";
static IDX_PRODUCT_PRODUCT_GROUP_ID: &str = "idx_product_product_group_id";
static IDX_PRODUCT_TRANSLATION_PRODUCT_ID: &str = "idx_product_translation_product_id";
static IDX_PRODUCT_TRANSLATION_LANGUAGE: &str = "idx_product_translation_product_id_language";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(integer(Product::ProductGroupId))
                    .col(string_uniq(Product::Slug))
                    .col(integer(Product::Position))
                    .col(string_null(Product::ImagePath))
                    .col(boolean(Product::Active))
                    .col(timestamp(Product::CreatedAt))
                    .col(timestamp(Product::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_PRODUCT_GROUP_ID)
                    .from_tbl(Product::Table)
                    .from_col(Product::ProductGroupId)
                    .to_tbl(ProductGroup::Table)
                    .to_col(ProductGroup::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_PRODUCT_GROUP_ID)
                    .table(Product::Table)
                    .col(Product::ProductGroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductTranslation::Id))
                    .col(integer(ProductTranslation::ProductId))
                    .col(string(ProductTranslation::Language))
                    .col(string(ProductTranslation::Name))
                    .col(text_null(ProductTranslation::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_TRANSLATION_PRODUCT_ID)
                    .from_tbl(ProductTranslation::Table)
                    .from_col(ProductTranslation::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_TRANSLATION_PRODUCT_ID)
                    .table(ProductTranslation::Table)
                    .col(ProductTranslation::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_TRANSLATION_LANGUAGE)
                    .table(ProductTranslation::Table)
                    .col(ProductTranslation::ProductId)
                    .col(ProductTranslation::Language)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_TRANSLATION_LANGUAGE)
                    .table(ProductTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_TRANSLATION_PRODUCT_ID)
                    .table(ProductTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCT_TRANSLATION_PRODUCT_ID)
                    .table(ProductTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductTranslation::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_PRODUCT_GROUP_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCT_PRODUCT_GROUP_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    ProductGroupId,
    Slug,
    Position,
    ImagePath,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductTranslation {
    Table,
    Id,
    ProductId,
    Language,
    Name,
    Description,
}
