use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::content::{CatalogRepository, ProductGroupRepository, ProductRepository},
    error::{content::ContentError, Error},
    model::content::{ProductGroupDto, SaveProductGroupDto, TranslationDto},
    service::{language::LanguageRegistry, storage::FileStorage, translation},
    util::slug,
};

pub struct ProductGroupService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageRegistry,
}

impl<'a> ProductGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageRegistry) -> Self {
        Self { db, languages }
    }

    pub async fn create(&self, dto: &SaveProductGroupDto) -> Result<ProductGroupDto, Error> {
        slug::validate(&dto.slug)?;
        self.languages.validate_set(&dto.translations)?;

        let group_repo = ProductGroupRepository::new(self.db);

        if group_repo.get_by_slug(&dto.slug).await?.is_some() {
            return Err(ContentError::SlugTaken(dto.slug.clone()).into());
        }

        let txn = self.db.begin().await?;

        let group = {
            let group_repo = ProductGroupRepository::new(&txn);
            let group = group_repo.create(dto).await?;
            group_repo
                .insert_translations(group.id, &dto.translations)
                .await?;
            group
        };

        txn.commit().await?;

        let translations = group_repo.translations(group.id).await?;

        Ok(to_dto(group, to_translation_dtos(translations)))
    }

    pub async fn update(&self, id: i32, dto: &SaveProductGroupDto) -> Result<ProductGroupDto, Error> {
        slug::validate(&dto.slug)?;
        self.languages.validate_set(&dto.translations)?;

        let group_repo = ProductGroupRepository::new(self.db);

        let group = group_repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Product group",
            id,
        })?;

        if group.slug != dto.slug {
            if let Some(other) = group_repo.get_by_slug(&dto.slug).await? {
                if other.id != id {
                    return Err(ContentError::SlugTaken(dto.slug.clone()).into());
                }
            }
        }

        let existing = group_repo.translations(id).await?;

        let txn = self.db.begin().await?;

        let group = {
            let group_repo = ProductGroupRepository::new(&txn);
            let group = group_repo.update_attrs(group, dto).await?;

            let plan = translation::reconcile(existing, &dto.translations, |row| &row.language);
            group_repo.apply_translation_plan(id, plan).await?;

            group
        };

        txn.commit().await?;

        let translations = group_repo.translations(id).await?;

        Ok(to_dto(group, to_translation_dtos(translations)))
    }

    /// Deletes a group; its products, their translations and catalog rows
    /// cascade in the database, so the files they referenced are collected
    /// first and removed from disk afterwards.
    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), Error> {
        let group_repo = ProductGroupRepository::new(self.db);

        let group = group_repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Product group",
            id,
        })?;

        let products = ProductRepository::new(self.db).list(Some(group.id)).await?;

        let mut files: Vec<String> = Vec::new();
        files.extend(group.image_path.clone());

        let catalog_repo = CatalogRepository::new(self.db);
        for product in &products {
            files.extend(product.image_path.clone());
            for catalog in catalog_repo.list_by_product(product.id).await? {
                files.push(catalog.file_path);
            }
        }

        let txn = self.db.begin().await?;
        ProductGroupRepository::new(&txn).delete(group.id).await?;
        txn.commit().await?;

        for path in files {
            if let Err(err) = storage.remove(&path).await {
                tracing::warn!("failed to remove file {path:?} of deleted group: {err}");
            }
        }

        Ok(())
    }

    pub async fn set_image(
        &self,
        id: i32,
        image_path: String,
        storage: &FileStorage,
    ) -> Result<ProductGroupDto, Error> {
        let group_repo = ProductGroupRepository::new(self.db);

        let group = group_repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Product group",
            id,
        })?;

        let replaced = group.image_path.clone();
        let group = group_repo.set_image_path(group, Some(image_path)).await?;

        if let Some(old_path) = replaced {
            if let Err(err) = storage.remove(&old_path).await {
                tracing::warn!("failed to remove replaced group image {old_path:?}: {err}");
            }
        }

        let translations = group_repo.translations(group.id).await?;

        Ok(to_dto(group, to_translation_dtos(translations)))
    }

    pub async fn get(&self, id: i32, language: Option<&str>) -> Result<ProductGroupDto, Error> {
        let group_repo = ProductGroupRepository::new(self.db);

        let group = group_repo.get_by_id(id).await?.ok_or(ContentError::NotFound {
            entity: "Product group",
            id,
        })?;

        let translations = group_repo.translations(group.id).await?;

        Ok(to_dto(group, self.localize(translations, language)?))
    }

    pub async fn list(&self, language: Option<&str>) -> Result<Vec<ProductGroupDto>, Error> {
        let group_repo = ProductGroupRepository::new(self.db);

        let groups = group_repo.list().await?;
        let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();

        let mut by_group: HashMap<i32, Vec<entity::product_group_translation::Model>> =
            HashMap::new();
        for row in group_repo.translations_for_groups(&ids).await? {
            by_group.entry(row.product_group_id).or_default().push(row);
        }

        groups
            .into_iter()
            .map(|group| {
                let translations = by_group.remove(&group.id).unwrap_or_default();
                Ok(to_dto(group, self.localize(translations, language)?))
            })
            .collect()
    }

    fn localize(
        &self,
        translations: Vec<entity::product_group_translation::Model>,
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

fn to_translation_dtos(
    rows: Vec<entity::product_group_translation::Model>,
) -> Vec<TranslationDto> {
    rows.into_iter()
        .map(|row| TranslationDto {
            language: row.language,
            name: row.name,
            description: row.description,
            body: None,
        })
        .collect()
}

fn to_dto(
    group: entity::product_group::Model,
    translations: Vec<TranslationDto>,
) -> ProductGroupDto {
    ProductGroupDto {
        id: group.id,
        slug: group.slug,
        position: group.position,
        image_path: group.image_path,
        active: group.active,
        translations,
    }
}
