use sea_orm_migration::{prelude::*, schema::*};

static FK_QM_DOCUMENT_TRANSLATION_DOCUMENT_ID: &str = "fk_qm_document_translation_qm_document_id";
static IDX_QM_DOCUMENT_TRANSLATION_DOCUMENT_ID: &str = "idx_qm_document_translation_qm_document_id";
static IDX_QM_DOCUMENT_TRANSLATION_LANGUAGE: &str =
    "idx_qm_document_translation_qm_document_id_language";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QmDocument::Table)
                    .if_not_exists()
                    .col(pk_auto(QmDocument::Id))
                    .col(string_null(QmDocument::FilePath))
                    .col(integer(QmDocument::Position))
                    .col(boolean(QmDocument::IsCertificate))
                    .col(boolean(QmDocument::Active))
                    .col(timestamp(QmDocument::CreatedAt))
                    .col(timestamp(QmDocument::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QmDocumentTranslation::Table)
                    .if_not_exists()
                    .col(pk_auto(QmDocumentTranslation::Id))
                    .col(integer(QmDocumentTranslation::QmDocumentId))
                    .col(string(QmDocumentTranslation::Language))
                    .col(string(QmDocumentTranslation::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_QM_DOCUMENT_TRANSLATION_DOCUMENT_ID)
                    .from_tbl(QmDocumentTranslation::Table)
                    .from_col(QmDocumentTranslation::QmDocumentId)
                    .to_tbl(QmDocument::Table)
                    .to_col(QmDocument::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_QM_DOCUMENT_TRANSLATION_DOCUMENT_ID)
                    .table(QmDocumentTranslation::Table)
                    .col(QmDocumentTranslation::QmDocumentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_QM_DOCUMENT_TRANSLATION_LANGUAGE)
                    .table(QmDocumentTranslation::Table)
                    .col(QmDocumentTranslation::QmDocumentId)
                    .col(QmDocumentTranslation::Language)
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
                    .name(IDX_QM_DOCUMENT_TRANSLATION_LANGUAGE)
                    .table(QmDocumentTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_QM_DOCUMENT_TRANSLATION_DOCUMENT_ID)
                    .table(QmDocumentTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_QM_DOCUMENT_TRANSLATION_DOCUMENT_ID)
                    .table(QmDocumentTranslation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(QmDocumentTranslation::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(QmDocument::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum QmDocument {
    Table,
    Id,
    FilePath,
    Position,
    IsCertificate,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum QmDocumentTranslation {
    Table,
    Id,
    QmDocumentId,
    Language,
    Name,
}
