//! v1 API endpoints

pub mod ask;
pub mod documents;

use axum::{
    routing::{post, put},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/ask", post(ask::ask_question))
        .route(
            "/documents",
            post(documents::upload_document).delete(documents::clear_documents),
        )
        .route("/documents/{file_name}", put(documents::upload_document_bytes))
}
