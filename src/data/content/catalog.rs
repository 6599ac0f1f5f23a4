use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::content::TranslationDto;

pub struct CatalogRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        product_id: i32,
        file_path: &str,
    ) -> Result<entity::catalog::Model, DbErr> {
        let catalog = entity::catalog::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            file_path: ActiveValue::Set(file_path.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        catalog.insert(self.conn).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::catalog::Model>, DbErr> {
        entity::prelude::Catalog::find_by_id(id).one(self.conn).await
    }

    pub async fn list_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<entity::catalog::Model>, DbErr> {
        entity::prelude::Catalog::find()
            .filter(entity::catalog::Column::ProductId.eq(product_id))
            .order_by_asc(entity::catalog::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Catalog::delete_by_id(id)
            .exec(self.conn)
            .await
    }

    pub async fn translations(
        &self,
        catalog_id: i32,
    ) -> Result<Vec<entity::catalog_translation::Model>, DbErr> {
        entity::prelude::CatalogTranslation::find()
            .filter(entity::catalog_translation::Column::CatalogId.eq(catalog_id))
            .all(self.conn)
            .await
    }

    pub async fn translations_for_catalogs(
        &self,
        catalog_ids: &[i32],
    ) -> Result<Vec<entity::catalog_translation::Model>, DbErr> {
        entity::prelude::CatalogTranslation::find()
            .filter(entity::catalog_translation::Column::CatalogId.is_in(catalog_ids.to_vec()))
            .all(self.conn)
            .await
    }

    pub async fn insert_translations(
        &self,
        catalog_id: i32,
        translations: &[TranslationDto],
    ) -> Result<(), DbErr> {
        let rows = translations
            .iter()
            .map(|t| entity::catalog_translation::ActiveModel {
                catalog_id: ActiveValue::Set(catalog_id),
                language: ActiveValue::Set(t.language.clone()),
                name: ActiveValue::Set(t.name.clone()),
                ..Default::default()
            });

        entity::prelude::CatalogTranslation::insert_many(rows)
            .exec(self.conn)
            .await?;

        Ok(())
    }
}
