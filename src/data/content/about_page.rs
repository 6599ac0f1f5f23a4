use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{model::content::TranslationDto, service::translation::TranslationPlan};

/// Repository for the singleton about page row and its translations.
pub struct AboutPageRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AboutPageRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Returns the about page row, creating it on first access.
    pub async fn get_or_create(&self) -> Result<entity::about_page::Model, DbErr> {
        let existing = entity::prelude::AboutPage::find()
            .order_by_asc(entity::about_page::Column::Id)
            .one(self.conn)
            .await?;

        if let Some(page) = existing {
            return Ok(page);
        }

        let page = entity::about_page::ActiveModel {
            image_path: ActiveValue::Set(None),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        page.insert(self.conn).await
    }

    pub async fn touch(
        &self,
        page: entity::about_page::Model,
    ) -> Result<entity::about_page::Model, DbErr> {
        let mut page = page.into_active_model();

        page.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        page.update(self.conn).await
    }

    pub async fn set_image_path(
        &self,
        page: entity::about_page::Model,
        image_path: Option<String>,
    ) -> Result<entity::about_page::Model, DbErr> {
        let mut page = page.into_active_model();

        page.image_path = ActiveValue::Set(image_path);
        page.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        page.update(self.conn).await
    }

    pub async fn translations(
        &self,
        about_page_id: i32,
    ) -> Result<Vec<entity::about_page_translation::Model>, DbErr> {
        entity::prelude::AboutPageTranslation::find()
            .filter(entity::about_page_translation::Column::AboutPageId.eq(about_page_id))
            .all(self.conn)
            .await
    }

    pub async fn insert_translations(
        &self,
        about_page_id: i32,
        translations: &[TranslationDto],
    ) -> Result<(), DbErr> {
        let rows = translations
            .iter()
            .map(|t| entity::about_page_translation::ActiveModel {
                about_page_id: ActiveValue::Set(about_page_id),
                language: ActiveValue::Set(t.language.clone()),
                title: ActiveValue::Set(t.name.clone()),
                body: ActiveValue::Set(t.body.clone()),
                ..Default::default()
            });

        entity::prelude::AboutPageTranslation::insert_many(rows)
            .exec(self.conn)
            .await?;

        Ok(())
    }

    pub async fn apply_translation_plan(
        &self,
        about_page_id: i32,
        plan: TranslationPlan<entity::about_page_translation::Model>,
    ) -> Result<(), DbErr> {
        if !plan.insert.is_empty() {
            self.insert_translations(about_page_id, &plan.insert).await?;
        }

        for (row, dto) in plan.update {
            let mut row = row.into_active_model();
            row.title = ActiveValue::Set(dto.name.clone());
            row.body = ActiveValue::Set(dto.body.clone());
            row.update(self.conn).await?;
        }

        for row in plan.remove {
            entity::prelude::AboutPageTranslation::delete_by_id(row.id)
                .exec(self.conn)
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fabrica_test_utils::{TestBuilder, TestError};

    use crate::data::content::AboutPageRepository;

    /// The first access creates the singleton row, later calls return it
    #[tokio::test]
    async fn get_or_create_is_stable() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let about_repo = AboutPageRepository::new(&test.db);

        let first = about_repo.get_or_create().await?;
        let second = about_repo.get_or_create().await?;

        assert_eq!(first.id, second.id);

        Ok(())
    }
}
