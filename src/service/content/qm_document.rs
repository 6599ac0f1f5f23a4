use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::content::QmDocumentRepository,
    error::{content::ContentError, Error},
    model::content::{QmDocumentDto, SaveQmDocumentDto, TranslationDto},
    service::{language::LanguageRegistry, storage::FileStorage, translation},
};

/// Quality management documents and certificates: a PDF plus a localized
/// display name per language.
pub struct QmDocumentService<'a> {
    db: &'a DatabaseConnection,
    languages: &'a LanguageRegistry,
}

impl<'a> QmDocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, languages: &'a LanguageRegistry) -> Self {
        Self { db, languages }
    }

    pub async fn create(&self, dto: &SaveQmDocumentDto) -> Result<QmDocumentDto, Error> {
        self.languages.validate_set(&dto.translations)?;

        let txn = self.db.begin().await?;

        let document = {
            let document_repo = QmDocumentRepository::new(&txn);
            let document = document_repo.create(dto).await?;
            document_repo
                .insert_translations(document.id, &dto.translations)
                .await?;
            document
        };

        txn.commit().await?;

        let document_repo = QmDocumentRepository::new(self.db);
        let translations = document_repo.translations(document.id).await?;

        Ok(to_dto(document, to_translation_dtos(translations)))
    }

    pub async fn update(&self, id: i32, dto: &SaveQmDocumentDto) -> Result<QmDocumentDto, Error> {
        self.languages.validate_set(&dto.translations)?;

        let document_repo = QmDocumentRepository::new(self.db);

        let document = document_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "QM document",
                id,
            })?;

        let existing = document_repo.translations(id).await?;

        let txn = self.db.begin().await?;

        let document = {
            let document_repo = QmDocumentRepository::new(&txn);
            let document = document_repo.update_attrs(document, dto).await?;

            let plan = translation::reconcile(existing, &dto.translations, |row| &row.language);
            document_repo.apply_translation_plan(id, plan).await?;

            document
        };

        txn.commit().await?;

        let translations = document_repo.translations(id).await?;

        Ok(to_dto(document, to_translation_dtos(translations)))
    }

    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), Error> {
        let document_repo = QmDocumentRepository::new(self.db);

        let document = document_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "QM document",
                id,
            })?;

        let txn = self.db.begin().await?;
        QmDocumentRepository::new(&txn).delete(document.id).await?;
        txn.commit().await?;

        if let Some(file_path) = &document.file_path {
            if let Err(err) = storage.remove(file_path).await {
                tracing::warn!("failed to remove document file {file_path:?}: {err}");
            }
        }

        Ok(())
    }

    /// Records a freshly stored PDF and removes the replaced file.
    pub async fn set_file(
        &self,
        id: i32,
        file_path: String,
        storage: &FileStorage,
    ) -> Result<QmDocumentDto, Error> {
        let document_repo = QmDocumentRepository::new(self.db);

        let document = document_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "QM document",
                id,
            })?;

        let replaced = document.file_path.clone();
        let document = document_repo.set_file_path(document, Some(file_path)).await?;

        if let Some(old_path) = replaced {
            if let Err(err) = storage.remove(&old_path).await {
                tracing::warn!("failed to remove replaced document file {old_path:?}: {err}");
            }
        }

        let translations = document_repo.translations(document.id).await?;

        Ok(to_dto(document, to_translation_dtos(translations)))
    }

    pub async fn get(&self, id: i32, language: Option<&str>) -> Result<QmDocumentDto, Error> {
        let document_repo = QmDocumentRepository::new(self.db);

        let document = document_repo
            .get_by_id(id)
            .await?
            .ok_or(ContentError::NotFound {
                entity: "QM document",
                id,
            })?;

        let translations = document_repo.translations(document.id).await?;

        Ok(to_dto(document, self.localize(translations, language)?))
    }

    pub async fn list(&self, language: Option<&str>) -> Result<Vec<QmDocumentDto>, Error> {
        let document_repo = QmDocumentRepository::new(self.db);

        let documents = document_repo.list().await?;
        let ids: Vec<i32> = documents.iter().map(|d| d.id).collect();

        let mut by_document: HashMap<i32, Vec<entity::qm_document_translation::Model>> =
            HashMap::new();
        for row in document_repo.translations_for_documents(&ids).await? {
            by_document.entry(row.qm_document_id).or_default().push(row);
        }

        documents
            .into_iter()
            .map(|document| {
                let translations = by_document.remove(&document.id).unwrap_or_default();
                Ok(to_dto(document, self.localize(translations, language)?))
            })
            .collect()
    }

    fn localize(
        &self,
        translations: Vec<entity::qm_document_translation::Model>,
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

fn to_translation_dtos(rows: Vec<entity::qm_document_translation::Model>) -> Vec<TranslationDto> {
    rows.into_iter()
        .map(|row| TranslationDto {
            language: row.language,
            name: row.name,
            description: None,
            body: None,
        })
        .collect()
}

fn to_dto(
    document: entity::qm_document::Model,
    translations: Vec<TranslationDto>,
) -> QmDocumentDto {
    QmDocumentDto {
        id: document.id,
        file_path: document.file_path,
        position: document.position,
        is_certificate: document.is_certificate,
        active: document.active,
        translations,
    }
}
