use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::content::{CatalogRepository, ProductGroupRepository, ProductRepository},
    error::{content::ContentError, Error},
    model::content::{ProductDto, SaveProductDto, TranslationDto},
    service::{language::LanguageRegistry, storage::FileStorage, translation},
    util::slug,
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageRegistry,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageRegistry) -> Self {
        Self { db, languages }
    }

    pub async fn create(&self, dto: &SaveProductDto) -> Result<ProductDto, Error> {
        slug::validate(&dto.slug)?;
        self.languages.validate_set(&dto.translations)?;

        let product_repo = ProductRepository::new(self.db);

        ProductGroupRepository::new(self.db)
            .get_by_id(dto.product_group_id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Product group",
                id: dto.product_group_id,
            })?;

        if product_repo.get_by_slug(&dto.slug).await?.is_some() {
            return Err(ContentError::SlugTaken(dto.slug.clone()).into());
        }

        let txn = self.db.begin().await?;

        let product = {
            let product_repo = ProductRepository::new(&txn);
            let product = product_repo.create(dto).await?;
            product_repo
                .insert_translations(product.id, &dto.translations)
                .await?;
            product
        };

        txn.commit().await?;

        let translations = product_repo.translations(product.id).await?;

        Ok(to_dto(product, to_translation_dtos(translations)))
    }

    pub async fn update(&self, id: i32, dto: &SaveProductDto) -> Result<ProductDto, Error> {
        slug::validate(&dto.slug)?;
        self.languages.validate_set(&dto.translations)?;

        let product_repo = ProductRepository::new(self.db);

        let product = product_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Product",
                id,
            })?;

        ProductGroupRepository::new(self.db)
            .get_by_id(dto.product_group_id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Product group",
                id: dto.product_group_id,
            })?;

        if product.slug != dto.slug {
            if let Some(other) = product_repo.get_by_slug(&dto.slug).await? {
                if other.id != id {
                    return Err(ContentError::SlugTaken(dto.slug.clone()).into());
                }
            }
        }

        let existing = product_repo.translations(id).await?;

        let txn = self.db.begin().await?;

        let product = {
            let product_repo = ProductRepository::new(&txn);
            let product = product_repo.update_attrs(product, dto).await?;

            let plan = translation::reconcile(existing, &dto.translations, |row| &row.language);
            product_repo.apply_translation_plan(id, plan).await?;

            product
        };

        txn.commit().await?;

        let translations = product_repo.translations(id).await?;

        Ok(to_dto(product, to_translation_dtos(translations)))
    }

    /// Deletes a product; translations and catalog rows cascade, catalog
    /// PDFs and the product image are removed from disk afterwards.
    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), Error> {
        let product_repo = ProductRepository::new(self.db);

        let product = product_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Product",
                id,
            })?;

        let mut files: Vec<String> = Vec::new();
        files.extend(product.image_path.clone());
        for catalog in CatalogRepository::new(self.db)
            .list_by_product(product.id)
            .await?
        {
            files.push(catalog.file_path);
        }

        let txn = self.db.begin().await?;
        ProductRepository::new(&txn).delete(product.id).await?;
        txn.commit().await?;

        for path in files {
            if let Err(err) = storage.remove(&path).await {
                tracing::warn!("failed to remove file {path:?} of deleted product: {err}");
            }
        }

        Ok(())
    }

    pub async fn set_image(
        &self,
        id: i32,
        image_path: String,
        storage: &FileStorage,
    ) -> Result<ProductDto, Error> {
        let product_repo = ProductRepository::new(self.db);

        let product = product_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Product",
                id,
            })?;

        let replaced = product.image_path.clone();
        let product = product_repo
            .set_image_path(product, Some(image_path))
            .await?;

        if let Some(old_path) = replaced {
            if let Err(err) = storage.remove(&old_path).await {
                tracing::warn!("failed to remove replaced product image {old_path:?}: {err}");
            }
        }

        let translations = product_repo.translations(product.id).await?;

        Ok(to_dto(product, to_translation_dtos(translations)))
    }

    pub async fn get(&self, id: i32, language: Option<&str>) -> Result<ProductDto, Error> {
        let product_repo = ProductRepository::new(self.db);

        let product = product_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Product",
                id,
            })?;

        let translations = product_repo.translations(product.id).await?;

        Ok(to_dto(product, self.localize(translations, language)?))
    }

    pub async fn list(
        &self,
        product_group_id: Option<i32>,
        language: Option<&str>,
    ) -> Result<Vec<ProductDto>, Error> {
        let product_repo = ProductRepository::new(self.db);

        let products = product_repo.list(product_group_id).await?;
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();

        let mut by_product: HashMap<i32, Vec<entity::product_translation::Model>> = HashMap::new();
        for row in product_repo.translations_for_products(&ids).await? {
            by_product.entry(row.product_id).or_default().push(row);
        }

        products
            .into_iter()
            .map(|product| {
                let translations = by_product.remove(&product.id).unwrap_or_default();
                Ok(to_dto(product, self.localize(translations, language)?))
            })
            .collect()
    }

    fn localize(
        &self,
        translations: Vec<entity::product_translation::Model>,
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

fn to_translation_dtos(rows: Vec<entity::product_translation::Model>) -> Vec<TranslationDto> {
    rows.into_iter()
        .map(|row| TranslationDto {
            language: row.language,
            name: row.name,
            description: row.description,
            body: None,
        })
        .collect()
}

fn to_dto(product: entity::product::Model, translations: Vec<TranslationDto>) -> ProductDto {
    ProductDto {
        id: product.id,
        product_group_id: product.product_group_id,
        slug: product.slug,
        position: product.position,
        image_path: product.image_path,
        active: product.active,
        translations,
    }
}
