use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::content::{SaveQmDocumentDto, TranslationDto},
    service::translation::TranslationPlan,
};

pub struct QmDocumentRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> QmDocumentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        dto: &SaveQmDocumentDto,
    ) -> Result<entity::qm_document::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let document = entity::qm_document::ActiveModel {
            file_path: ActiveValue::Set(None),
            position: ActiveValue::Set(dto.position),
            is_certificate: ActiveValue::Set(dto.is_certificate),
            active: ActiveValue::Set(dto.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        document.insert(self.conn).await
    }

    pub async fn update_attrs(
        &self,
        document: entity::qm_document::Model,
        dto: &SaveQmDocumentDto,
    ) -> Result<entity::qm_document::Model, DbErr> {
        let mut document = document.into_active_model();

        document.position = ActiveValue::Set(dto.position);
        document.is_certificate = ActiveValue::Set(dto.is_certificate);
        document.active = ActiveValue::Set(dto.active);
        document.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        document.update(self.conn).await
    }

    /// Records the stored PDF path on the document row.
    pub async fn set_file_path(
        &self,
        document: entity::qm_document::Model,
        file_path: Option<String>,
    ) -> Result<entity::qm_document::Model, DbErr> {
        let mut document = document.into_active_model();

        document.file_path = ActiveValue::Set(file_path);
        document.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        document.update(self.conn).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::qm_document::Model>, DbErr> {
        entity::prelude::QmDocument::find_by_id(id)
            .one(self.conn)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::qm_document::Model>, DbErr> {
        entity::prelude::QmDocument::find()
            .order_by_asc(entity::qm_document::Column::Position)
            .order_by_asc(entity::qm_document::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::QmDocument::delete_by_id(id)
            .exec(self.conn)
            .await
    }

    pub async fn translations(
        &self,
        qm_document_id: i32,
    ) -> Result<Vec<entity::qm_document_translation::Model>, DbErr> {
        entity::prelude::QmDocumentTranslation::find()
            .filter(entity::qm_document_translation::Column::QmDocumentId.eq(qm_document_id))
            .all(self.conn)
            .await
    }

    pub async fn translations_for_documents(
        &self,
        qm_document_ids: &[i32],
    ) -> Result<Vec<entity::qm_document_translation::Model>, DbErr> {
        entity::prelude::QmDocumentTranslation::find()
            .filter(
                entity::qm_document_translation::Column::QmDocumentId
                    .is_in(qm_document_ids.to_vec()),
            )
            .all(self.conn)
            .await
    }

    pub async fn insert_translations(
        &self,
        qm_document_id: i32,
        translations: &[TranslationDto],
    ) -> Result<(), DbErr> {
        let rows = translations
            .iter()
            .map(|t| entity::qm_document_translation::ActiveModel {
                qm_document_id: ActiveValue::Set(qm_document_id),
                language: ActiveValue::Set(t.language.clone()),
                name: ActiveValue::Set(t.name.clone()),
                ..Default::default()
            });

        entity::prelude::QmDocumentTranslation::insert_many(rows)
            .exec(self.conn)
            .await?;

        Ok(())
    }

    pub async fn apply_translation_plan(
        &self,
        qm_document_id: i32,
        plan: TranslationPlan<entity::qm_document_translation::Model>,
    ) -> Result<(), DbErr> {
        if !plan.insert.is_empty() {
            self.insert_translations(qm_document_id, &plan.insert)
                .await?;
        }

        for (row, dto) in plan.update {
            let mut row = row.into_active_model();
            row.name = ActiveValue::Set(dto.name.clone());
            row.update(self.conn).await?;
        }

        for row in plan.remove {
            entity::prelude::QmDocumentTranslation::delete_by_id(row.id)
                .exec(self.conn)
                .await?;
        }

        Ok(())
    }
}
