use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260715_000003_product::Product;

static FK_CATALOG_PRODUCT_ID: &str = "fk_catalog_product_id";
static FK_CATALOG_TRANSLATION_CATALOG_ID: &str = "fk_catalog_translation_catalog_id";
static IDX_CATALOG_PRODUCT_ID: &str = "idx_catalog_product_id";
static IDX_CATALOG_TRANSLATION_LANGUAGE: &str = "idx_catalog_translation_catalog_id_language";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Catalog::Table)
                    .if_not_exists()
                    .col(pk_auto(Catalog::Id))
                    .col(integer(Catalog::ProductId))
                    .col(string(Catalog::FilePath))
                    .col(timestamp(Catalog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CATALOG_PRODUCT_ID)
                    .from_tbl(Catalog::Table)
                    .from_col(Catalog::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CATALOG_PRODUCT_ID)
                    .table(Catalog::Table)
                    .col(Catalog::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CatalogTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(CatalogTranslation::Id))
                    .col(integer(CatalogTranslation::CatalogId))
                    .col(string(CatalogTranslation::Language))
                    .col(string(CatalogTranslation::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CATALOG_TRANSLATION_CATALOG_ID)
                    .from_tbl(CatalogTranslation::Table)
                    .from_col(CatalogTranslation::CatalogId)
                    .to_tbl(Catalog::Table)
                    .to_col(Catalog::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CATALOG_TRANSLATION_LANGUAGE)
                    .table(CatalogTranslation::Table)
                    .col(CatalogTranslation::CatalogId)
                    .col(CatalogTranslation::Language)
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
                    .name(IDX_CATALOG_TRANSLATION_LANGUAGE)
                    .table(CatalogTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CATALOG_TRANSLATION_CATALOG_ID)
                    .table(CatalogTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CatalogTranslation::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CATALOG_PRODUCT_ID)
                    .table(Catalog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CATALOG_PRODUCT_ID)
                    .table(Catalog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Catalog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Catalog {
    Table,
    Id,
    ProductId,
    FilePath,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CatalogTranslation {
    Table,
    Id,
    CatalogId,
    Language,
    Name,
}
