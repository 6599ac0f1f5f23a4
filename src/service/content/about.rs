use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::content::AboutPageRepository,
    error::Error,
    model::content::{AboutPageDto, SaveAboutPageDto, TranslationDto},
    service::{language::LanguageRegistry, storage::FileStorage, translation},
};

/// The singleton about page: one image plus title/body per language.
pub struct AboutPageService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageRegistry,
}

impl<'a> AboutPageService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageRegistry) -> Self {
        Self { db, languages }
    }

    pub async fn get(&self, language: Option<&str>) -> Result<AboutPageDto, Error> {
        let about_repo = AboutPageRepository::new(self.db);

        let page = about_repo.get_or_create().await?;
        let translations = about_repo.translations(page.id).await?;

        Ok(to_dto(page, self.localize(translations, language)?))
    }

    pub async fn update(&self, dto: &SaveAboutPageDto) -> Result<AboutPageDto, Error> {
        self.languages.validate_set(&dto.translations)?;

        let about_repo = AboutPageRepository::new(self.db);

        let page = about_repo.get_or_create().await?;
        let existing = about_repo.translations(page.id).await?;

        let txn = self.db.begin().await?;

        let page = {
            let about_repo = AboutPageRepository::new(&txn);

            let plan = translation::reconcile(existing, &dto.translations, |row| &row.language);
            about_repo.apply_translation_plan(page.id, plan).await?;

            about_repo.touch(page).await?
        };

        txn.commit().await?;

        let translations = about_repo.translations(page.id).await?;

        Ok(to_dto(page, to_translation_dtos(translations)))
    }

    pub async fn set_image(
        &self,
        image_path: String,
        storage: &FileStorage,
    ) -> Result<AboutPageDto, Error> {
        let about_repo = AboutPageRepository::new(self.db);

        let page = about_repo.get_or_create().await?;

        let replaced = page.image_path.clone();
        let page = about_repo.set_image_path(page, Some(image_path)).await?;

        if let Some(old_path) = replaced {
            if let Err(err) = storage.remove(&old_path).await {
                tracing::warn!("failed to remove replaced about image {old_path:?}: {err}");
            }
        }

        let translations = about_repo.translations(page.id).await?;

        Ok(to_dto(page, to_translation_dtos(translations)))
    }

    /// The about page row id, for attaching extra content blocks.
    pub async fn page_id(&self) -> Result<i32, Error> {
        Ok(AboutPageRepository::new(self.db).get_or_create().await?.id)
    }

    fn localize(
        &self,
        translations: Vec<entity::about_page_translation::Model>,
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

fn to_translation_dtos(rows: Vec<entity::about_page_translation::Model>) -> Vec<TranslationDto> {
    rows.into_iter()
        .map(|row| TranslationDto {
            language: row.language,
            name: row.title,
            description: None,
            body: row.body,
        })
        .collect()
}

fn to_dto(page: entity::about_page::Model, translations: Vec<TranslationDto>) -> AboutPageDto {
    AboutPageDto {
        id: page.id,
        image_path: page.image_path,
        translations,
    }
}
