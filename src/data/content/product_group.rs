use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::content::{SaveProductGroupDto, TranslationDto},
    service::translation::TranslationPlan,
};

pub struct ProductGroupRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProductGroupRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        dto: &SaveProductGroupDto,
    ) -> Result<entity::product_group::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let group = entity::product_group::ActiveModel {
            slug: ActiveValue::Set(dto.slug.clone()),
            position: ActiveValue::Set(dto.position),
            image_path: ActiveValue::Set(None),
            active: ActiveValue::Set(dto.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        group.insert(self.conn).await
    }

    pub async fn update_attrs(
        &self,
        group: entity::product_group::Model,
        dto: &SaveProductGroupDto,
    ) -> Result<entity::product_group::Model, DbErr> {
        let mut group = group.into_active_model();

        group.slug = ActiveValue::Set(dto.slug.clone());
        group.position = ActiveValue::Set(dto.position);
        group.active = ActiveValue::Set(dto.active);
        group.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        group.update(self.conn).await
    }

    pub async fn set_image_path(
        &self,
        group: entity::product_group::Model,
        image_path: Option<String>,
    ) -> Result<entity::product_group::Model, DbErr> {
        let mut group = group.into_active_model();

        group.image_path = ActiveValue::Set(image_path);
        group.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        group.update(self.conn).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::product_group::Model>, DbErr> {
        entity::prelude::ProductGroup::find_by_id(id)
            .one(self.conn)
            .await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::product_group::Model>, DbErr> {
        entity::prelude::ProductGroup::find()
            .filter(entity::product_group::Column::Slug.eq(slug))
            .one(self.conn)
            .await
    }

    /// Loads several groups at once; used when composing market contents.
    pub async fn get_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::product_group::Model>, DbErr> {
        entity::prelude::ProductGroup::find()
            .filter(entity::product_group::Column::Id.is_in(ids.to_vec()))
            .all(self.conn)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::product_group::Model>, DbErr> {
        entity::prelude::ProductGroup::find()
            .order_by_asc(entity::product_group::Column::Position)
            .order_by_asc(entity::product_group::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProductGroup::delete_by_id(id)
            .exec(self.conn)
            .await
    }

    pub async fn translations(
        &self,
        product_group_id: i32,
    ) -> Result<Vec<entity::product_group_translation::Model>, DbErr> {
        entity::prelude::ProductGroupTranslation::find()
            .filter(
                entity::product_group_translation::Column::ProductGroupId.eq(product_group_id),
            )
            .all(self.conn)
            .await
    }

    pub async fn translations_for_groups(
        &self,
        product_group_ids: &[i32],
    ) -> Result<Vec<entity::product_group_translation::Model>, DbErr> {
        entity::prelude::ProductGroupTranslation::find()
            .filter(
                entity::product_group_translation::Column::ProductGroupId
                    .is_in(product_group_ids.to_vec()),
            )
            .all(self.conn)
            .await
    }

    pub async fn insert_translations(
        &self,
        product_group_id: i32,
        translations: &[TranslationDto],
    ) -> Result<(), DbErr> {
        let rows = translations
            .iter()
            .map(|t| entity::product_group_translation::ActiveModel {
                product_group_id: ActiveValue::Set(product_group_id),
                language: ActiveValue::Set(t.language.clone()),
                name: ActiveValue::Set(t.name.clone()),
                description: ActiveValue::Set(t.description.clone()),
                ..Default::default()
            });

        entity::prelude::ProductGroupTranslation::insert_many(rows)
            .exec(self.conn)
            .await?;

        Ok(())
    }

    pub async fn apply_translation_plan(
        &self,
        product_group_id: i32,
        plan: TranslationPlan<entity::product_group_translation::Model>,
    ) -> Result<(), DbErr> {
        if !plan.insert.is_empty() {
            self.insert_translations(product_group_id, &plan.insert)
                .await?;
        }

        for (row, dto) in plan.update {
            let mut row = row.into_active_model();
            row.name = ActiveValue::Set(dto.name.clone());
            row.description = ActiveValue::Set(dto.description.clone());
            row.update(self.conn).await?;
        }

        for row in plan.remove {
            entity::prelude::ProductGroupTranslation::delete_by_id(row.id)
                .exec(self.conn)
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fabrica_test_utils::{TestBuilder, TestError};
    use sea_orm::EntityTrait;

    use crate::{
        data::content::ProductGroupRepository,
        model::content::{SaveProductGroupDto, TranslationDto},
    };

    fn save_dto(slug: &str, languages: &[&str]) -> SaveProductGroupDto {
        SaveProductGroupDto {
            slug: slug.to_string(),
            position: 0,
            active: true,
            translations: languages
                .iter()
                .map(|language| TranslationDto {
                    language: language.to_string(),
                    name: format!("{slug}-{language}"),
                    description: Some(format!("description-{language}")),
                    body: None,
                })
                .collect(),
        }
    }

    /// Expect success creating a group with translations
    #[tokio::test]
    async fn create_with_translations() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let group_repo = ProductGroupRepository::new(&test.db);

        let dto = save_dto("fasteners", &["tr", "en", "de", "fr"]);
        let group = group_repo.create(&dto).await?;
        group_repo
            .insert_translations(group.id, &dto.translations)
            .await?;

        assert_eq!(group_repo.translations(group.id).await?.len(), 4);

        Ok(())
    }

    /// Deleting a group cascades to its translations
    #[tokio::test]
    async fn delete_cascades_to_translations() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let group_repo = ProductGroupRepository::new(&test.db);

        let dto = save_dto("fasteners", &["tr", "en"]);
        let group = group_repo.create(&dto).await?;
        group_repo
            .insert_translations(group.id, &dto.translations)
            .await?;

        group_repo.delete(group.id).await?;

        let orphans = entity::prelude::ProductGroupTranslation::find()
            .all(&test.db)
            .await?;
        assert!(orphans.is_empty());

        Ok(())
    }
}
