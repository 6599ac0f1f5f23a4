use sea_orm_migration::{prelude::*, schema::*};

static FK_MARKET_TRANSLATION_MARKET_ID: &str = "fk_market_translation_market_id";
static IDX_MARKET_TRANSLATION_MARKET_ID: &str = "idx_market_translation_market_id";
static IDX_MARKET_TRANSLATION_LANGUAGE: &str = "idx_market_translation_market_id_language";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Market::Table)
                    .if_not_exists()
                    .col(pk_auto(Market::Id))
                    .col(string_uniq(Market::Slug))
                    .col(integer(Market::Position))
                    .col(boolean(Market::HasProducts))
                    .col(boolean(Market::HasSolutions))
                    .col(boolean(Market::HasCertificates))
                    .col(string_null(Market::ImagePath))
                    .col(boolean(Market::Active))
                    .col(timestamp(Market::CreatedAt))
                    .col(timestamp(Market::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MarketTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(MarketTranslation::Id))
                    .col(integer(MarketTranslation::MarketId))
                    .col(string(MarketTranslation::Language))
                    .col(string(MarketTranslation::Name))
                    .col(text_null(MarketTranslation::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MARKET_TRANSLATION_MARKET_ID)
                    .from_tbl(MarketTranslation::Table)
                    .from_col(MarketTranslation::MarketId)
                    .to_tbl(Market::Table)
                    .to_col(Market::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MARKET_TRANSLATION_MARKET_ID)
                    .table(MarketTranslation::Table)
                    .col(MarketTranslation::MarketId)
                    .to_owned(),
            )
            .await?;

        // One translation row per (market, language)
        manager
            .create_index(
                Index::create()
                    .name(IDX_MARKET_TRANSLATION_LANGUAGE)
                    .table(MarketTranslation::Table)
                    .col(MarketTranslation::MarketId)
                    .col(MarketTranslation::Language)
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
                    .name(IDX_MARKET_TRANSLATION_LANGUAGE)
                    .table(MarketTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MARKET_TRANSLATION_MARKET_ID)
                    .table(MarketTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MARKET_TRANSLATION_MARKET_ID)
                    .table(MarketTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MarketTranslation::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Market::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Market {
    Table,
    Id,
    Slug,
    Position,
    HasProducts,
    HasSolutions,
    HasCertificates,
    ImagePath,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MarketTranslation {
    Table,
    Id,
    MarketId,
    Language,
    Name,
    Description,
}
