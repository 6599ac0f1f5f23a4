use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::content::{SaveProductDto, TranslationDto},
    service::translation::TranslationPlan,
};

pub struct ProductRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(&self, dto: &SaveProductDto) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let product = entity::product::ActiveModel {
            product_group_id: ActiveValue::Set(dto.product_group_id),
            slug: ActiveValue::Set(dto.slug.clone()),
            position: ActiveValue::Set(dto.position),
            image_path: ActiveValue::Set(None),
            active: ActiveValue::Set(dto.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        product.insert(self.conn).await
    }

    pub async fn update_attrs(
        &self,
        product: entity::product::Model,
        dto: &SaveProductDto,
    ) -> Result<entity::product::Model, DbErr> {
        let mut product = product.into_active_model();

        product.product_group_id = ActiveValue::Set(dto.product_group_id);
        product.slug = ActiveValue::Set(dto.slug.clone());
        product.position = ActiveValue::Set(dto.position);
        product.active = ActiveValue::Set(dto.active);
        product.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        product.update(self.conn).await
    }

    pub async fn set_image_path(
        &self,
        product: entity::product::Model,
        image_path: Option<String>,
    ) -> Result<entity::product::Model, DbErr> {
        let mut product = product.into_active_model();

        product.image_path = ActiveValue::Set(image_path);
        product.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        product.update(self.conn).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.conn).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Slug.eq(slug))
            .one(self.conn)
            .await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(ids.to_vec()))
            .all(self.conn)
            .await
    }

    /// Lists products, optionally narrowed to one group.
    pub async fn list(
        &self,
        product_group_id: Option<i32>,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        let mut query = entity::prelude::Product::find();

        if let Some(group_id) = product_group_id {
            query = query.filter(entity::product::Column::ProductGroupId.eq(group_id));
        }

        query
            .order_by_asc(entity::product::Column::Position)
            .order_by_asc(entity::product::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Product::delete_by_id(id)
            .exec(self.conn)
            .await
    }

    pub async fn translations(
        &self,
        product_id: i32,
    ) -> Result<Vec<entity::product_translation::Model>, DbErr> {
        entity::prelude::ProductTranslation::find()
            .filter(entity::product_translation::Column::ProductId.eq(product_id))
            .all(self.conn)
            .await
    }

    pub async fn translations_for_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<entity::product_translation::Model>, DbErr> {
        entity::prelude::ProductTranslation::find()
            .filter(entity::product_translation::Column::ProductId.is_in(product_ids.to_vec()))
            .all(self.conn)
            .await
    }

    pub async fn insert_translations(
        &self,
        product_id: i32,
        translations: &[TranslationDto],
    ) -> Result<(), DbErr> {
        let rows = translations
            .iter()
            .map(|t| entity::product_translation::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                language: ActiveValue::Set(t.language.clone()),
                name: ActiveValue::Set(t.name.clone()),
                description: ActiveValue::Set(t.description.clone()),
                ..Default::default()
            });

        entity::prelude::ProductTranslation::insert_many(rows)
            .exec(self.conn)
            .await?;

        Ok(())
    }

    pub async fn apply_translation_plan(
        &self,
        product_id: i32,
        plan: TranslationPlan<entity::product_translation::Model>,
    ) -> Result<(), DbErr> {
        if !plan.insert.is_empty() {
            self.insert_translations(product_id, &plan.insert).await?;
        }

        for (row, dto) in plan.update {
            let mut row = row.into_active_model();
            row.name = ActiveValue::Set(dto.name.clone());
            row.description = ActiveValue::Set(dto.description.clone());
            row.update(self.conn).await?;
        }

        for row in plan.remove {
            entity::prelude::ProductTranslation::delete_by_id(row.id)
                .exec(self.conn)
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fabrica_test_utils::{TestBuilder, TestError};

    use crate::{
        data::content::ProductRepository,
        model::content::{SaveProductDto, TranslationDto},
    };

    fn save_dto(group_id: i32, slug: &str) -> SaveProductDto {
        SaveProductDto {
            product_group_id: group_id,
            slug: slug.to_string(),
            position: 0,
            active: true,
            translations: vec![TranslationDto {
                language: "en".to_string(),
                name: slug.to_string(),
                description: None,
                body: None,
            }],
        }
    }

    /// Expect Error inserting a product for a missing group
    #[tokio::test]
    async fn create_requires_existing_group() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let product_repo = ProductRepository::new(&test.db);

        let result = product_repo.create(&save_dto(99, "bolt-m8")).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Listing narrowed to a group only returns that group's products
    #[tokio::test]
    async fn list_filters_by_group() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let group_a = test.content().insert_product_group("group-a").await?;
        let group_b = test.content().insert_product_group("group-b").await?;

        let product_repo = ProductRepository::new(&test.db);
        product_repo.create(&save_dto(group_a.id, "bolt-m8")).await?;
        product_repo.create(&save_dto(group_b.id, "nut-m8")).await?;

        let products = product_repo.list(Some(group_a.id)).await?;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].slug, "bolt-m8");

        Ok(())
    }
}
