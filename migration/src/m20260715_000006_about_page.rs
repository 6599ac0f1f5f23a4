use sea_orm_migration::{prelude::*, schema::*};

static FK_ABOUT_PAGE_TRANSLATION_PAGE_ID: &str = "fk_about_page_translation_about_page_id";
static IDX_ABOUT_PAGE_TRANSLATION_LANGUAGE: &str =
    "idx_about_page_translation_about_page_id_language";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AboutPage::Table)
                    .if_not_exists()
                    .col(pk_auto(AboutPage::Id))
                    .col(string_null(AboutPage::ImagePath))
                    .col(timestamp(AboutPage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AboutPageTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(AboutPageTranslation::Id))
                    .col(integer(AboutPageTranslation::AboutPageId))
                    .col(string(AboutPageTranslation::Language))
                    .col(string(AboutPageTranslation::Title))
                    .col(text_null(AboutPageTranslation::Body))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ABOUT_PAGE_TRANSLATION_PAGE_ID)
                    .from_tbl(AboutPageTranslation::Table)
                    .from_col(AboutPageTranslation::AboutPageId)
                    .to_tbl(AboutPage::Table)
                    .to_col(AboutPage::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ABOUT_PAGE_TRANSLATION_LANGUAGE)
                    .table(AboutPageTranslation::Table)
                    .col(AboutPageTranslation::AboutPageId)
                    .col(AboutPageTranslation::Language)
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
                    .name(IDX_ABOUT_PAGE_TRANSLATION_LANGUAGE)
                    .table(AboutPageTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ABOUT_PAGE_TRANSLATION_PAGE_ID)
                    .table(AboutPageTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AboutPageTranslation::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AboutPage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AboutPage {
    Table,
    Id,
    ImagePath,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AboutPageTranslation {
    Table,
    Id,
    AboutPageId,
    Language,
    Title,
    Body,
}
