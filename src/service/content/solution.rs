use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use entity::extra_content::OwnerType;

use crate::{
    data::content::{ExtraContentRepository, SolutionRepository},
    error::{content::ContentError, Error},
    model::content::{SaveSolutionDto, SolutionDto, TranslationDto},
    service::{language::LanguageRegistry, storage::FileStorage, translation},
    util::slug,
};

pub struct SolutionService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageRegistry,
}

impl<'a> SolutionService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageRegistry) -> Self {
        Self { db, languages }
    }

    pub async fn create(&self, dto: &SaveSolutionDto) -> Result<SolutionDto, Error> {
        slug::validate(&dto.slug)?;
        self.languages.validate_set(&dto.translations)?;

        let solution_repo = SolutionRepository::new(self.db);

        if solution_repo.get_by_slug(&dto.slug).await?.is_some() {
            return Err(ContentError::SlugTaken(dto.slug.clone()).into());
        }

        let txn = self.db.begin().await?;

        let solution = {
            let solution_repo = SolutionRepository::new(&txn);
            let solution = solution_repo.create(dto).await?;
            solution_repo
                .insert_translations(solution.id, &dto.translations)
                .await?;
            solution
        };

        txn.commit().await?;

        let translations = solution_repo.translations(solution.id).await?;

        Ok(to_dto(solution, to_translation_dtos(translations)))
    }

    pub async fn update(&self, id: i32, dto: &SaveSolutionDto) -> Result<SolutionDto, Error> {
        slug::validate(&dto.slug)?;
        self.languages.validate_set(&dto.translations)?;

        let solution_repo = SolutionRepository::new(self.db);

        let solution = solution_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Solution",
                id,
            })?;

        if solution.slug != dto.slug {
            if let Some(other) = solution_repo.get_by_slug(&dto.slug).await? {
                if other.id != id {
                    return Err(ContentError::SlugTaken(dto.slug.clone()).into());
                }
            }
        }

        let existing = solution_repo.translations(id).await?;

        let txn = self.db.begin().await?;

        let solution = {
            let solution_repo = SolutionRepository::new(&txn);
            let solution = solution_repo.update_attrs(solution, dto).await?;

            let plan = translation::reconcile(existing, &dto.translations, |row| &row.language);
            solution_repo.apply_translation_plan(id, plan).await?;

            solution
        };

        txn.commit().await?;

        let translations = solution_repo.translations(id).await?;

        Ok(to_dto(solution, to_translation_dtos(translations)))
    }

    /// Deletes a solution together with its extra content blocks.
    ///
    /// Translations cascade in the database; the blocks are removed in the
    /// same transaction because their owner reference is polymorphic.
    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), Error> {
        let solution_repo = SolutionRepository::new(self.db);

        let solution = solution_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Solution",
                id,
            })?;

        let txn = self.db.begin().await?;
        SolutionRepository::new(&txn).delete(solution.id).await?;
        ExtraContentRepository::new(&txn)
            .delete_by_owner(OwnerType::Solution, solution.id)
            .await?;
        txn.commit().await?;

        if let Some(image_path) = &solution.image_path {
            if let Err(err) = storage.remove(image_path).await {
                tracing::warn!("failed to remove solution image {image_path:?}: {err}");
            }
        }

        Ok(())
    }

    pub async fn set_image(
        &self,
        id: i32,
        image_path: String,
        storage: &FileStorage,
    ) -> Result<SolutionDto, Error> {
        let solution_repo = SolutionRepository::new(self.db);

        let solution = solution_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Solution",
                id,
            })?;

        let replaced = solution.image_path.clone();
        let solution = solution_repo
            .set_image_path(solution, Some(image_path))
            .await?;

        if let Some(old_path) = replaced {
            if let Err(err) = storage.remove(&old_path).await {
                tracing::warn!("failed to remove replaced solution image {old_path:?}: {err}");
            }
        }

        let translations = solution_repo.translations(solution.id).await?;

        Ok(to_dto(solution, to_translation_dtos(translations)))
    }

    pub async fn get(&self, id: i32, language: Option<&str>) -> Result<SolutionDto, Error> {
        let solution_repo = SolutionRepository::new(self.db);

        let solution = solution_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "Solution",
                id,
            })?;

        let translations = solution_repo.translations(solution.id).await?;

        Ok(to_dto(solution, self.localize(translations, language)?))
    }

    /// Public solution detail lookup by slug.
    pub async fn get_by_slug(
        &self,
        slug: &str,
        language: Option<&str>,
    ) -> Result<SolutionDto, Error> {
        let solution_repo = SolutionRepository::new(self.db);

        let solution =
            solution_repo
                .get_by_slug(slug)
                .await?
                .ok_or_else(|| ContentError::SlugNotFound {
                    entity: "Solution",
                    slug: slug.to_string(),
                })?;

        let translations = solution_repo.translations(solution.id).await?;

        Ok(to_dto(solution, self.localize(translations, language)?))
    }

    pub async fn list(&self, language: Option<&str>) -> Result<Vec<SolutionDto>, Error> {
        let solution_repo = SolutionRepository::new(self.db);

        let solutions = solution_repo.list().await?;
        let ids: Vec<i32> = solutions.iter().map(|s| s.id).collect();

        let mut by_solution: HashMap<i32, Vec<entity::solution_translation::Model>> =
            HashMap::new();
        for row in solution_repo.translations_for_solutions(&ids).await? {
            by_solution.entry(row.solution_id).or_default().push(row);
        }

        solutions
            .into_iter()
            .map(|solution| {
                let translations = by_solution.remove(&solution.id).unwrap_or_default();
                Ok(to_dto(solution, self.localize(translations, language)?))
            })
            .collect()
    }

    fn localize(
        &self,
        translations: Vec<entity::solution_translation::Model>,
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

fn to_translation_dtos(rows: Vec<entity::solution_translation::Model>) -> Vec<TranslationDto> {
    rows.into_iter()
        .map(|row| TranslationDto {
            language: row.language,
            name: row.name,
            description: row.description,
            body: None,
        })
        .collect()
}

fn to_dto(solution: entity::solution::Model, translations: Vec<TranslationDto>) -> SolutionDto {
    SolutionDto {
        id: solution.id,
        slug: solution.slug,
        position: solution.position,
        image_path: solution.image_path,
        active: solution.active,
        translations,
    }
}
