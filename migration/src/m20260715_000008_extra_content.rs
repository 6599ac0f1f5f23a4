use sea_orm_migration::{prelude::*, schema::*};

static IDX_EXTRA_CONTENT_OWNER: &str = "idx_extra_content_owner_type_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExtraContent::Table)
                    .if_not_exists()
                    .col(pk_auto(ExtraContent::Id))
                    .col(text(ExtraContent::OwnerType))
                    .col(integer(ExtraContent::OwnerId))
                    .col(string(ExtraContent::Language))
                    .col(integer(ExtraContent::Position))
                    .col(text(ExtraContent::BlockType))
                    .col(string(ExtraContent::Title))
                    .col(text(ExtraContent::Payload))
                    .to_owned(),
            )
            .await?;

        // Owner rows are looked up as a unit on every page render and
        // cascade-deleted by the service layer; no FK because the owner
        // column is polymorphic over solution and about_page.
        manager
            .create_index(
                Index::create()
                    .name(IDX_EXTRA_CONTENT_OWNER)
                    .table(ExtraContent::Table)
                    .col(ExtraContent::OwnerType)
                    .col(ExtraContent::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXTRA_CONTENT_OWNER)
                    .table(ExtraContent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExtraContent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ExtraContent {
    Table,
    Id,
    OwnerType,
    OwnerId,
    Language,
    Position,
    BlockType,
    Title,
    Payload,
}
