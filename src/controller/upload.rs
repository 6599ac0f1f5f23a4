use axum::{
    extract::{multipart::Field, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{content::ContentError, storage::StorageError, Error},
    model::{
        api::{ErrorDto, StoredFileDto},
        app::AppState,
        auth::AdminClaims,
    },
    service::{
        content::{
            AboutPageService, MarketService, ProductGroupService, ProductService,
            QmDocumentService, SolutionService,
        },
        storage::{ALLOWED_IMAGE_MIMES, ALLOWED_PDF_MIMES, MAX_IMAGE_BYTES, MAX_PDF_BYTES},
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Upload an image and attach it to a content entity
#[utoipa::path(
    post,
    path = "/api/upload/image/{entity}/{id}",
    tag = UPLOAD_TAG,
    params(
        ("entity" = String, Path, description = "One of markets, product-groups, products, solutions, about"),
        ("id" = i32, Path, description = "Entity id (ignored for about)")
    ),
    responses(
        (status = 200, description = "Image stored and attached", body = StoredFileDto),
        (status = 400, description = "Missing or invalid file", body = ErrorDto),
        (status = 404, description = "Entity not found", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 415, description = "Unsupported media type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path((entity, id)): Path<(String, i32)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let (filename, bytes) = read_single_file(multipart, ALLOWED_IMAGE_MIMES, MAX_IMAGE_BYTES).await?;

    let path = state.storage.save(&entity, id, &filename, &bytes).await?;

    let result = attach_image(&state, &entity, id, path.clone()).await;

    if let Err(err) = result {
        // The row was not updated, do not leave the new file behind.
        let _ = state.storage.remove(&path).await;
        return Err(err);
    }

    Ok((StatusCode::OK, Json(StoredFileDto { path })))
}

/// Upload a PDF and attach it to a QM document
#[utoipa::path(
    post,
    path = "/api/upload/pdf/{entity}/{id}",
    tag = UPLOAD_TAG,
    params(
        ("entity" = String, Path, description = "Currently only qm-documents"),
        ("id" = i32, Path, description = "Entity id")
    ),
    responses(
        (status = 200, description = "PDF stored and attached", body = StoredFileDto),
        (status = 400, description = "Missing or invalid file", body = ErrorDto),
        (status = 404, description = "Entity not found", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 415, description = "Unsupported media type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_pdf(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path((entity, id)): Path<(String, i32)>,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    if entity != "qm-documents" {
        return Err(ContentError::Validation(format!(
            "PDF uploads are not supported for {entity:?}"
        ))
        .into());
    }

    let (filename, bytes) = read_single_file(multipart, ALLOWED_PDF_MIMES, MAX_PDF_BYTES).await?;

    let path = state.storage.save(&entity, id, &filename, &bytes).await?;

    let document_service = QmDocumentService::new(&state.db, &state.languages);
    if let Err(err) = document_service.set_file(id, path.clone(), &state.storage).await {
        let _ = state.storage.remove(&path).await;
        return Err(err);
    }

    Ok((StatusCode::OK, Json(StoredFileDto { path })))
}

async fn attach_image(
    state: &AppState,
    entity: &str,
    id: i32,
    path: String,
) -> Result<(), Error> {
    match entity {
        "markets" => {
            MarketService::new(&state.db, &state.languages)
                .set_image(id, path, &state.storage)
                .await?;
        }
        "product-groups" => {
            ProductGroupService::new(&state.db, &state.languages)
                .set_image(id, path, &state.storage)
                .await?;
        }
        "products" => {
            ProductService::new(&state.db, &state.languages)
                .set_image(id, path, &state.storage)
                .await?;
        }
        "solutions" => {
            SolutionService::new(&state.db, &state.languages)
                .set_image(id, path, &state.storage)
                .await?;
        }
        "about" => {
            AboutPageService::new(&state.db, &state.languages)
                .set_image(path, &state.storage)
                .await?;
        }
        other => {
            return Err(
                ContentError::Validation(format!("Unknown entity type {other:?}")).into(),
            );
        }
    }

    Ok(())
}

/// Reads the first file field of a multipart request, enforcing the media
/// type allowlist and a hard size limit while streaming.
pub(crate) async fn read_single_file(
    mut multipart: Multipart,
    allowed: &[&str],
    max_bytes: usize,
) -> Result<(String, Vec<u8>), Error> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        return read_file_field(field, allowed, max_bytes).await;
    }

    Err(StorageError::MissingFile.into())
}

pub(crate) async fn read_file_field(
    mut field: Field<'_>,
    allowed: &[&str],
    max_bytes: usize,
) -> Result<(String, Vec<u8>), Error> {
    let mime = field.content_type().unwrap_or_default().to_string();

    if !allowed.contains(&mime.as_str()) {
        return Err(StorageError::UnsupportedMediaType(mime).into());
    }

    let filename = field.file_name().unwrap_or("file").to_string();

    let mut bytes: Vec<u8> = Vec::new();
    while let Some(chunk) = field.chunk().await? {
        if bytes.len() + chunk.len() > max_bytes {
            return Err(StorageError::TooLarge { limit: max_bytes }.into());
        }
        bytes.extend_from_slice(&chunk);
    }

    if bytes.is_empty() {
        return Err(StorageError::MissingFile.into());
    }

    Ok((filename, bytes))
}
