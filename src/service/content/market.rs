use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::content::MarketRepository,
    error::{content::ContentError, Error},
    model::content::{MarketDto, SaveMarketDto, TranslationDto},
    service::{language::LanguageRegistry, storage::FileStorage, translation},
    util::slug,
};

/// CRUD over markets and their translations.
pub struct MarketService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageRegistry,
}

impl<'a> MarketService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageRegistry) -> Self {
        Self { db, languages }
    }

    /// Creates a market with its full translation set in one transaction.
    pub async fn create(&self, dto: &SaveMarketDto) -> Result<MarketDto, Error> {
        slug::validate(&dto.slug)?;
        self.languages.validate_set(&dto.translations)?;

        let market_repo = MarketRepository::new(self.db);

        if market_repo.get_by_slug(&dto.slug).await?.is_some() {
            return Err(ContentError::SlugTaken(dto.slug.clone()).into());
        }

        let txn = self.db.begin().await?;

        let market = {
            let market_repo = MarketRepository::new(&txn);
            let market = market_repo.create(dto).await?;
            market_repo
                .insert_translations(market.id, &dto.translations)
                .await?;
            market
        };

        txn.commit().await?;

        let translations = market_repo.translations(market.id).await?;

        Ok(to_dto(market, to_translation_dtos(translations)))
    }

    /// Replaces scalar attributes and reconciles the translation set.
    pub async fn update(&self, id: i32, dto: &SaveMarketDto) -> Result<MarketDto, Error> {
        slug::validate(&dto.slug)?;
        self.languages.validate_set(&dto.translations)?;

        let market_repo = MarketRepository::new(self.db);

        let market = market_repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Market",
            id,
        })?;

        if market.slug != dto.slug {
            if let Some(other) = market_repo.get_by_slug(&dto.slug).await? {
                if other.id != id {
                    return Err(ContentError::SlugTaken(dto.slug.clone()).into());
                }
            }
        }

        let existing = market_repo.translations(id).await?;

        let txn = self.db.begin().await?;

        let market = {
            let market_repo = MarketRepository::new(&txn);
            let market = market_repo.update_attrs(market, dto).await?;

            let plan = translation::reconcile(existing, &dto.translations, |row| &row.language);
            market_repo.apply_translation_plan(id, plan).await?;

            market
        };

        txn.commit().await?;

        let translations = market_repo.translations(id).await?;

        Ok(to_dto(market, to_translation_dtos(translations)))
    }

    /// Deletes a market; translations and content associations cascade in
    /// the database, the stored image is removed afterwards.
    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), Error> {
        let market_repo = MarketRepository::new(self.db);

        let market = market_repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Market",
            id,
        })?;

        let txn = self.db.begin().await?;
        MarketRepository::new(&txn).delete(market.id).await?;
        txn.commit().await?;

        if let Some(image_path) = &market.image_path {
            if let Err(err) = storage.remove(image_path).await {
                tracing::warn!("failed to remove market image {image_path:?}: {err}");
            }
        }

        Ok(())
    }

    /// Records a freshly stored image and removes the replaced file.
    pub async fn set_image(
        &self,
        id: i32,
        image_path: String,
        storage: &FileStorage,
    ) -> Result<MarketDto, Error> {
        let market_repo = MarketRepository::new(self.db);

        let market = market_repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Market",
            id,
        })?;

        let replaced = market.image_path.clone();
        let market = market_repo.set_image_path(market, Some(image_path)).await?;

        if let Some(old_path) = replaced {
            if let Err(err) = storage.remove(&old_path).await {
                tracing::warn!("failed to remove replaced market image {old_path:?}: {err}");
            }
        }

        let translations = market_repo.translations(market.id).await?;

        Ok(to_dto(market, to_translation_dtos(translations)))
    }

    pub async fn get(&self, id: i32, language: Option<&str>) -> Result<MarketDto, Error> {
        let market_repo = MarketRepository::new(self.db);

        let market = market_repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Market",
            id,
        })?;

        let translations = market_repo.translations(market.id).await?;

        Ok(to_dto(market, self.localize(translations, language)?))
    }

    pub async fn get_by_slug(&self, slug: &str, language: Option<&str>) -> Result<MarketDto, Error> {
        let market_repo = MarketRepository::new(self.db);

        let market =
            market_repo
                .get_by_slug(slug)
                .await?
                .ok_or_else(|| ContentError::SlugNotFound {
                    entity: "Market",
                    slug: slug.to_string(),
                })?;

        let translations = market_repo.translations(market.id).await?;

        Ok(to_dto(market, self.localize(translations, language)?))
    }

    /// Lists markets with either the full translation set or, when a
    /// language is requested, the single resolved row per market.
    pub async fn list(&self, language: Option<&str>) -> Result<Vec<MarketDto>, Error> {
        let market_repo = MarketRepository::new(self.db);

        let markets = market_repo.list().await?;
        let ids: Vec<i32> = markets.iter().map(|m| m.id).collect();

        let mut by_market: HashMap<i32, Vec<entity::market_translation::Model>> = HashMap::new();
        for row in market_repo.translations_for_markets(&ids).await? {
            by_market.entry(row.market_id).or_default().push(row);
        }

        markets
            .into_iter()
            .map(|market| {
                let translations = by_market.remove(&market.id).unwrap_or_default();
                Ok(to_dto(market, self.localize(translations, language)?))
            })
            .collect()
    }

    fn localize(
        &self,
        translations: Vec<entity::market_translation::Model>,
        language: Option<&str>,
    ) -> Result<Vec<TranslationDto>, Error> {
        match language {
            None => Ok(to_translation_dtos(translations)),
            Some(code) => {
                self.languages.validate_code(code)?;

                let resolved = self
                    .languages
                    .resolve(Some(code), &translations, |row| &row.language);

                Ok(to_translation_dtos(resolved.cloned().into_iter().collect()))
            }
        }
    }
}

fn to_translation_dtos(rows: Vec<entity::market_translation::Model>) -> Vec<TranslationDto> {
    rows.into_iter()
        .map(|row| TranslationDto {
            language: row.language,
            name: row.name,
            description: row.description,
            body: None,
        })
        .collect()
}

fn to_dto(market: entity::market::Model, translations: Vec<TranslationDto>) -> MarketDto {
    MarketDto {
        id: market.id,
        slug: market.slug,
        position: market.position,
        has_products: market.has_products,
        has_solutions: market.has_solutions,
        has_certificates: market.has_certificates,
        image_path: market.image_path,
        active: market.active,
        translations,
    }
}
