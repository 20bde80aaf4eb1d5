//! Document indexing endpoints
//!
//! One document is active at a time; uploading replaces it.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::ParserInput;
use crate::infrastructure::ingestion::IndexSummary;

#[derive(Debug, Clone, Deserialize)]
pub struct UploadDocumentRequest {
    pub file_name: String,
    pub content: String,
}

/// POST /v1/documents
pub async fn upload_document(
    State(state): State<AppState>,
    Json(request): Json<UploadDocumentRequest>,
) -> Result<(StatusCode, Json<IndexSummary>), ApiError> {
    let input = ParserInput::new(request.file_name, request.content.into_bytes());
    install_document(&state, input).await
}

/// PUT /v1/documents/{file_name} with the raw file as body (PDF, DOCX, XLSX, ...)
pub async fn upload_document_bytes(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<IndexSummary>), ApiError> {
    let input = ParserInput::new(file_name, body.to_vec());
    install_document(&state, input).await
}

async fn install_document(
    state: &AppState,
    input: ParserInput,
) -> Result<(StatusCode, Json<IndexSummary>), ApiError> {
    let indexed = state.indexer.index(input).await?;

    state.gateway().set_retriever(Some(indexed.retriever)).await;

    info!(
        file_name = %indexed.summary.file_name,
        chunks = indexed.summary.chunks,
        "Document indexed"
    );

    Ok((StatusCode::CREATED, Json(indexed.summary)))
}

/// DELETE /v1/documents
pub async fn clear_documents(State(state): State<AppState>) -> StatusCode {
    state.gateway().set_retriever(None).await;
    info!("Document index cleared");

    StatusCode::NO_CONTENT
}
