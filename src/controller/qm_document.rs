use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, LanguageQuery, MessageDto},
        app::AppState,
        auth::AdminClaims,
        content::{QmDocumentDto, SaveQmDocumentDto},
    },
    service::content::QmDocumentService,
};

pub static QM_DOCUMENT_TAG: &str = "qm-document";

/// List QM documents and certificates
#[utoipa::path(
    get,
    path = "/api/qm-documents",
    tag = QM_DOCUMENT_TAG,
    params(LanguageQuery),
    responses(
        (status = 200, description = "Documents in display order", body = Vec<QmDocumentDto>),
        (status = 400, description = "Unsupported language", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_qm_documents(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let document_service = QmDocumentService::new(&state.db, &state.languages);

    let documents = document_service.list(query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(documents)))
}

/// Get one QM document by id
#[utoipa::path(
    get,
    path = "/api/qm-documents/{id}",
    tag = QM_DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document id"), LanguageQuery),
    responses(
        (status = 200, description = "The document", body = QmDocumentDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_qm_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<LanguageQuery>,
) -> Result<impl IntoResponse, Error> {
    let document_service = QmDocumentService::new(&state.db, &state.languages);

    let document = document_service.get(id, query.language.as_deref()).await?;

    Ok((StatusCode::OK, Json(document)))
}

/// Create a QM document
#[utoipa::path(
    post,
    path = "/api/qm-documents",
    tag = QM_DOCUMENT_TAG,
    request_body = SaveQmDocumentDto,
    responses(
        (status = 201, description = "Document created", body = QmDocumentDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_qm_document(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(payload): Json<SaveQmDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    let document_service = QmDocumentService::new(&state.db, &state.languages);

    let document = document_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(document)))
}

/// Update a QM document
#[utoipa::path(
    put,
    path = "/api/qm-documents/{id}",
    tag = QM_DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document id")),
    request_body = SaveQmDocumentDto,
    responses(
        (status = 200, description = "Document updated", body = QmDocumentDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_qm_document(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
    Json(payload): Json<SaveQmDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    let document_service = QmDocumentService::new(&state.db, &state.languages);

    let document = document_service.update(id, &payload).await?;

    Ok((StatusCode::OK, Json(document)))
}

/// Delete a QM document and its stored PDF
#[utoipa::path(
    delete,
    path = "/api/qm-documents/{id}",
    tag = QM_DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document deleted", body = MessageDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_qm_document(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let document_service = QmDocumentService::new(&state.db, &state.languages);

    document_service.delete(id, &state.storage).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Document deleted".to_string(),
        }),
    ))
}
