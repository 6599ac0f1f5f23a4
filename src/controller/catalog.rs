use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::upload::read_file_field,
    error::{content::ContentError, Error},
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        auth::AdminClaims,
        content::{CatalogDto, TranslationDto},
    },
    service::{
        content::CatalogService,
        storage::{ALLOWED_PDF_MIMES, MAX_PDF_BYTES},
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// Attach a catalog PDF to a product.
///
/// Multipart body: a `file` part with the PDF and a `names` part holding a
/// JSON array of `{language, name}` objects, one per configured language.
#[utoipa::path(
    post,
    path = "/api/catalogs/product/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 201, description = "Catalog created", body = CatalogDto),
        (status = 400, description = "Missing file or invalid names", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 415, description = "Unsupported media type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_catalog(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut names: Option<Vec<TranslationDto>> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("file") => {
                file = Some(read_file_field(field, ALLOWED_PDF_MIMES, MAX_PDF_BYTES).await?);
            }
            Some("names") => {
                let raw = field.text().await?;
                names = Some(serde_json::from_str(&raw).map_err(|_| {
                    ContentError::Validation(
                        "The names part must be a JSON array of {language, name} objects"
                            .to_string(),
                    )
                })?);
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or(crate::error::storage::StorageError::MissingFile)?;
    let names = names.ok_or_else(|| {
        ContentError::Validation("Missing names part with catalog names".to_string())
    })?;

    let path = state.storage.save("catalogs", id, &filename, &bytes).await?;

    let catalog_service = CatalogService::new(&state.db, &state.languages);

    match catalog_service.create(id, &path, &names).await {
        Ok(catalog) => Ok((StatusCode::CREATED, Json(catalog))),
        Err(err) => {
            // The row was not created, do not leave the file behind.
            let _ = state.storage.remove(&path).await;
            Err(err)
        }
    }
}

/// Delete a catalog and its stored PDF
#[utoipa::path(
    delete,
    path = "/api/catalogs/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Catalog id")),
    responses(
        (status = 200, description = "Catalog deleted", body = MessageDto),
        (status = 404, description = "Catalog not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_catalog(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db, &state.languages);

    catalog_service.delete(id, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Catalog deleted".to_string(),
        }),
    ))
}
