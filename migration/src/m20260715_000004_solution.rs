use sea_orm_migration::{prelude::*, schema::*};

static FK_SOLUTION_TRANSLATION_SOLUTION_ID: &str = "fk_solution_translation_solution_id";
static IDX_SOLUTION_TRANSLATION_SOLUTION_ID: &str = "idx_solution_translation_solution_id";
static IDX_SOLUTION_TRANSLATION_LANGUAGE: &str = "idx_solution_translation_solution_id_language";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Solution::Table)
                    .if_not_exists()
                    .col(pk_auto(Solution::Id))
                    .col(string_uniq(Solution::Slug))
                    .col(integer(Solution::Position))
                    .col(string_null(Solution::ImagePath))
                    .col(boolean(Solution::Active))
                    .col(timestamp(Solution::CreatedAt))
                    .col(timestamp(Solution::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SolutionTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(SolutionTranslation::Id))
                    .col(integer(SolutionTranslation::SolutionId))
                    .col(string(SolutionTranslation::Language))
                    .col(string(SolutionTranslation::Name))
                    .col(text_null(SolutionTranslation::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SOLUTION_TRANSLATION_SOLUTION_ID)
                    .from_tbl(SolutionTranslation::Table)
                    .from_col(SolutionTranslation::SolutionId)
                    .to_tbl(Solution::Table)
                    .to_col(Solution::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SOLUTION_TRANSLATION_SOLUTION_ID)
                    .table(SolutionTranslation::Table)
                    .col(SolutionTranslation::SolutionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SOLUTION_TRANSLATION_LANGUAGE)
                    .table(SolutionTranslation::Table)
                    .col(SolutionTranslation::SolutionId)
                    .col(SolutionTranslation::Language)
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
                    .name(IDX_SOLUTION_TRANSLATION_LANGUAGE)
                    .table(SolutionTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SOLUTION_TRANSLATION_SOLUTION_ID)
                    .table(SolutionTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SOLUTION_TRANSLATION_SOLUTION_ID)
                    .table(SolutionTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SolutionTranslation::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Solution::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Solution {
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
enum SolutionTranslation {
    Table,
    Id,
    SolutionId,
    Language,
    Name,
    Description,
}
