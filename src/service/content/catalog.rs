use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::content::{CatalogRepository, ProductRepository},
    error::{content::ContentError, Error},
    model::content::{CatalogDto, TranslationDto},
    service::{language::LanguageRegistry, storage::FileStorage},
};

/// Product catalogs: one stored PDF with a localized name per language.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageRegistry,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageRegistry) -> Self {
        Self { db, languages }
    }

    /// Creates a catalog row plus its name translations in one transaction.
    /// The PDF must already be stored; `file_path` is its relative path.
    pub async fn create(
        &self,
        product_id: i32,
        file_path: &str,
        names: &[TranslationDto],
    ) -> Result<CatalogDto, Error> {
        self.languages.validate_set(names)?;

        ProductRepository::new(self.db)
            .get_by_id(product_id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Product",
                id: product_id,
            })?;

        let txn = self.db.begin().await?;

        let catalog = {
            let catalog_repo = CatalogRepository::new(&txn);
            let catalog = catalog_repo.create(product_id, file_path).await?;
            catalog_repo.insert_translations(catalog.id, names).await?;
            catalog
        };

        txn.commit().await?;

        let translations = CatalogRepository::new(self.db)
            .translations(catalog.id)
            .await?;

        Ok(to_dto(catalog, to_translation_dtos(translations)))
    }

    pub async fn list_by_product(&self, product_id: i32) -> Result<Vec<CatalogDto>, Error> {
        let catalog_repo = CatalogRepository::new(self.db);

        let catalogs = catalog_repo.list_by_product(product_id).await?;
        let ids: Vec<i32> = catalogs.iter().map(|c| c.id).collect();

        let mut by_catalog: HashMap<i32, Vec<entity::catalog_translation::Model>> = HashMap::new();
        for row in catalog_repo.translations_for_catalogs(&ids).await? {
            by_catalog.entry(row.catalog_id).or_default().push(row);
        }

        Ok(catalogs
            .into_iter()
            .map(|catalog| {
                let translations = by_catalog.remove(&catalog.id).unwrap_or_default();
                to_dto(catalog, to_translation_dtos(translations))
            })
            .collect())
    }

    /// Deletes the catalog row (translations cascade) and its stored PDF.
    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), Error> {
        let catalog_repo = CatalogRepository::new(self.db);

        let catalog = catalog_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Catalog",
                id,
            })?;

        let txn = self.db.begin().await?;
        CatalogRepository::new(&txn).delete(catalog.id).await?;
        txn.commit().await?;

        if let Err(err) = storage.remove(&catalog.file_path).await {
            tracing::warn!(
                "failed to remove catalog file {:?}: {err}",
                catalog.file_path
            );
        }

        Ok(())
    }
}

fn to_translation_dtos(rows: Vec<entity::catalog_translation::Model>) -> Vec<TranslationDto> {
    rows.into_iter()
        .map(|row| TranslationDto {
            language: row.language,
            name: row.name,
            description: None,
            body: None,
        })
        .collect()
}

fn to_dto(catalog: entity::catalog::Model, translations: Vec<TranslationDto>) -> CatalogDto {
    CatalogDto {
        id: catalog.id,
        product_id: catalog.product_id,
        file_path: catalog.file_path,
        translations,
    }
}
