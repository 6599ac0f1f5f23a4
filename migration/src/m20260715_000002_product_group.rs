use sea_orm_migration::{prelude::*, schema::*};

static FK_PRODUCT_GROUP_TRANSLATION_GROUP_ID: &str = "fk_product_group_translation_product_group_id";
static IDX_PRODUCT_GROUP_TRANSLATION_GROUP_ID: &str =
    "idx_product_group_translation_product_group_id";
static IDX_PRODUCT_GROUP_TRANSLATION_LANGUAGE: &str =
    "idx_product_group_translation_product_group_id_language";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductGroup::Id))
                    .col(string_uniq(ProductGroup::Slug))
                    .col(integer(ProductGroup::Position))
                    .col(string_null(ProductGroup::ImagePath))
                    .col(boolean(ProductGroup::Active))
                    .col(timestamp(ProductGroup::CreatedAt))
                    .col(timestamp(ProductGroup::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductGroupTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductGroupTranslation::Id))
                    .col(integer(ProductGroupTranslation::ProductGroupId))
                    .col(string(ProductGroupTranslation::Language))
                    .col(string(ProductGroupTranslation::Name))
                    .col(text_null(ProductGroupTranslation::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRODUCT_GROUP_TRANSLATION_GROUP_ID)
                    .from_tbl(ProductGroupTranslation::Table)
                    .from_col(ProductGroupTranslation::ProductGroupId)
                    .to_tbl(ProductGroup::Table)
                    .to_col(ProductGroup::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_GROUP_TRANSLATION_GROUP_ID)
                    .table(ProductGroupTranslation::Table)
                    .col(ProductGroupTranslation::ProductGroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_GROUP_TRANSLATION_LANGUAGE)
                    .table(ProductGroupTranslation::Table)
                    .col(ProductGroupTranslation::ProductGroupId)
                    .col(ProductGroupTranslation::Language)
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
                    .name(IDX_PRODUCT_GROUP_TRANSLATION_LANGUAGE)
                    .table(ProductGroupTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_GROUP_TRANSLATION_GROUP_ID)
                    .table(ProductGroupTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRODUCT_GROUP_TRANSLATION_GROUP_ID)
                    .table(ProductGroupTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(ProductGroupTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProductGroup {
    Table,
    Id,
    Slug,
    Position,
    ImagePath,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductGroupTranslation {
    Table,
    Id,
    ProductGroupId,
    Language,
    Name,
    Description,
}
