use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::content::{SaveMarketDto, TranslationDto},
    service::translation::TranslationPlan,
};

pub struct MarketRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MarketRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates the market parent row; translations are inserted separately.
    pub async fn create(&self, dto: &SaveMarketDto) -> Result<entity::market::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let market = entity::market::ActiveModel {
            slug: ActiveValue::Set(dto.slug.clone()),
            position: ActiveValue::Set(dto.position),
            has_products: ActiveValue::Set(dto.has_products),
            has_solutions: ActiveValue::Set(dto.has_solutions),
            has_certificates: ActiveValue::Set(dto.has_certificates),
            image_path: ActiveValue::Set(None),
            active: ActiveValue::Set(dto.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        market.insert(self.conn).await
    }

    /// Overwrites the scalar attributes of an existing market.
    pub async fn update_attrs(
        &self,
        market: entity::market::Model,
        dto: &SaveMarketDto,
    ) -> Result<entity::market::Model, DbErr> {
        let mut market = market.into_active_model();

        market.slug = ActiveValue::Set(dto.slug.clone());
        market.position = ActiveValue::Set(dto.position);
        market.has_products = ActiveValue::Set(dto.has_products);
        market.has_solutions = ActiveValue::Set(dto.has_solutions);
        market.has_certificates = ActiveValue::Set(dto.has_certificates);
        market.active = ActiveValue::Set(dto.active);
        market.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        market.update(self.conn).await
    }

    /// Records the stored image path on the market row.
    pub async fn set_image_path(
        &self,
        market: entity::market::Model,
        image_path: Option<String>,
    ) -> Result<entity::market::Model, DbErr> {
        let mut market = market.into_active_model();

        market.image_path = ActiveValue::Set(image_path);
        market.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        market.update(self.conn).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::market::Model>, DbErr> {
        entity::prelude::Market::find_by_id(id).one(self.conn).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::market::Model>, DbErr> {
        entity::prelude::Market::find()
            .filter(entity::market::Column::Slug.eq(slug))
            .one(self.conn)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::market::Model>, DbErr> {
        entity::prelude::Market::find()
            .order_by_asc(entity::market::Column::Position)
            .order_by_asc(entity::market::Column::Id)
            .all(self.conn)
            .await
    }

    /// Deletes a market; translations and content associations cascade.
    ///
    /// Returns OK regardless of the market existing, check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Market::delete_by_id(id)
            .exec(self.conn)
            .await
    }

    pub async fn translations(
        &self,
        market_id: i32,
    ) -> Result<Vec<entity::market_translation::Model>, DbErr> {
        entity::prelude::MarketTranslation::find()
            .filter(entity::market_translation::Column::MarketId.eq(market_id))
            .all(self.conn)
            .await
    }

    /// Loads the translations of several markets in one query, for listings.
    pub async fn translations_for_markets(
        &self,
        market_ids: &[i32],
    ) -> Result<Vec<entity::market_translation::Model>, DbErr> {
        entity::prelude::MarketTranslation::find()
            .filter(entity::market_translation::Column::MarketId.is_in(market_ids.to_vec()))
            .all(self.conn)
            .await
    }

    pub async fn insert_translations(
        &self,
        market_id: i32,
        translations: &[TranslationDto],
    ) -> Result<(), DbErr> {
        let rows = translations
            .iter()
            .map(|t| entity::market_translation::ActiveModel {
                market_id: ActiveValue::Set(market_id),
                language: ActiveValue::Set(t.language.clone()),
                name: ActiveValue::Set(t.name.clone()),
                description: ActiveValue::Set(t.description.clone()),
                ..Default::default()
            });

        entity::prelude::MarketTranslation::insert_many(rows)
            .exec(self.conn)
            .await?;

        Ok(())
    }

    /// Applies a reconciliation plan produced by
    /// [`crate::service::translation::reconcile`].
    pub async fn apply_translation_plan(
        &self,
        market_id: i32,
        plan: TranslationPlan<entity::market_translation::Model>,
    ) -> Result<(), DbErr> {
        if !plan.insert.is_empty() {
            self.insert_translations(market_id, &plan.insert).await?;
        }

        for (row, dto) in plan.update {
            let mut row = row.into_active_model();
            row.name = ActiveValue::Set(dto.name.clone());
            row.description = ActiveValue::Set(dto.description.clone());
            row.update(self.conn).await?;
        }

        for row in plan.remove {
            entity::prelude::MarketTranslation::delete_by_id(row.id)
                .exec(self.conn)
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fabrica_test_utils::TestBuilder;

    use crate::model::content::{SaveMarketDto, TranslationDto};

    fn save_dto(slug: &str, languages: &[&str]) -> SaveMarketDto {
        SaveMarketDto {
            slug: slug.to_string(),
            position: 0,
            has_products: true,
            has_solutions: false,
            has_certificates: false,
            active: true,
            translations: languages
                .iter()
                .map(|language| TranslationDto {
                    language: language.to_string(),
                    name: format!("{slug}-{language}"),
                    description: None,
                    body: None,
                })
                .collect(),
        }
    }

    mod create_tests {
        use fabrica_test_utils::{TestBuilder, TestError};

        use crate::data::content::MarketRepository;

        use super::save_dto;

        /// Expect success when inserting a market row
        #[tokio::test]
        async fn create_market() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;
            let market_repo = MarketRepository::new(&test.db);

            let created = market_repo
                .create(&save_dto("automotive", &[]))
                .await
                .unwrap();

            assert_eq!(created.slug, "automotive");
            assert!(created.has_products);
            assert!(!created.has_certificates);

            Ok(())
        }

        /// Expect Error when the slug is already taken
        #[tokio::test]
        async fn create_market_duplicate_slug() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;
            let market_repo = MarketRepository::new(&test.db);

            market_repo.create(&save_dto("automotive", &[])).await?;
            let result = market_repo.create(&save_dto("automotive", &[])).await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required tables have not been created
        #[tokio::test]
        async fn create_market_error() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            let market_repo = MarketRepository::new(&test.db);

            let result = market_repo.create(&save_dto("automotive", &[])).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod translation_tests {
        use fabrica_test_utils::{TestBuilder, TestError};

        use crate::{data::content::MarketRepository, service::translation};

        use super::save_dto;

        /// Expect one row per submitted language after insert
        #[tokio::test]
        async fn insert_translations() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;
            let market_repo = MarketRepository::new(&test.db);

            let dto = save_dto("rail", &["tr", "en", "de", "fr"]);
            let market = market_repo.create(&dto).await?;
            market_repo
                .insert_translations(market.id, &dto.translations)
                .await?;

            let rows = market_repo.translations(market.id).await?;

            assert_eq!(rows.len(), 4);

            Ok(())
        }

        /// Expect the unique (market, language) index to reject a duplicate
        #[tokio::test]
        async fn duplicate_language_rejected_by_index() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;
            let market_repo = MarketRepository::new(&test.db);

            let dto = save_dto("rail", &["en"]);
            let market = market_repo.create(&dto).await?;
            market_repo
                .insert_translations(market.id, &dto.translations)
                .await?;

            let result = market_repo
                .insert_translations(market.id, &dto.translations)
                .await;

            assert!(result.is_err());

            Ok(())
        }

        /// A reconciliation plan updates matched rows without changing ids
        #[tokio::test]
        async fn apply_plan_keeps_row_identity() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;
            let market_repo = MarketRepository::new(&test.db);

            let dto = save_dto("rail", &["tr", "en"]);
            let market = market_repo.create(&dto).await?;
            market_repo
                .insert_translations(market.id, &dto.translations)
                .await?;

            let before = market_repo.translations(market.id).await?;

            let mut updated = save_dto("rail", &["tr", "en"]);
            updated.translations[0].name = "yeni isim".to_string();

            let plan = translation::reconcile(before.clone(), &updated.translations, |row| {
                &row.language
            });
            market_repo.apply_translation_plan(market.id, plan).await?;

            let after = market_repo.translations(market.id).await?;

            assert_eq!(after.len(), 2);
            let tr_after = after.iter().find(|r| r.language == "tr").unwrap();
            let tr_before = before.iter().find(|r| r.language == "tr").unwrap();
            assert_eq!(tr_after.id, tr_before.id);
            assert_eq!(tr_after.name, "yeni isim");

            Ok(())
        }
    }

    mod delete_tests {
        use fabrica_test_utils::{TestBuilder, TestError};
        use sea_orm::EntityTrait;

        use crate::data::content::MarketRepository;

        use super::save_dto;

        /// Deleting the market removes its translation rows through the FK
        #[tokio::test]
        async fn delete_cascades_to_translations() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;
            let market_repo = MarketRepository::new(&test.db);

            let dto = save_dto("rail", &["tr", "en", "de", "fr"]);
            let market = market_repo.create(&dto).await?;
            market_repo
                .insert_translations(market.id, &dto.translations)
                .await?;

            let result = market_repo.delete(market.id).await?;
            assert_eq!(result.rows_affected, 1);

            let orphans = entity::prelude::MarketTranslation::find()
                .all(&test.db)
                .await?;
            assert!(orphans.is_empty());

            Ok(())
        }

        /// Expect no rows affected when the market does not exist
        #[tokio::test]
        async fn delete_missing_market() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;
            let market_repo = MarketRepository::new(&test.db);

            let result = market_repo.delete(42).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }

    /// Listing orders by position, then id
    #[tokio::test]
    async fn list_orders_by_position() {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let market_repo = crate::data::content::MarketRepository::new(&test.db);

        let mut first = save_dto("b-market", &[]);
        first.position = 2;
        let mut second = save_dto("a-market", &[]);
        second.position = 1;

        market_repo.create(&first).await.unwrap();
        market_repo.create(&second).await.unwrap();

        let markets = market_repo.list().await.unwrap();

        assert_eq!(markets[0].slug, "a-market");
        assert_eq!(markets[1].slug, "b-market");
    }
}
