//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_indexed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Serving, but answers come from web search only
    Degraded,
}

impl HealthResponse {
    fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            version: env!("CARGO_PKG_VERSION"),
            document_indexed: None,
            message: None,
        }
    }
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}

/// GET /ready
///
/// Always 200; reports degraded while no document is indexed.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(readiness(&state).await))
}

/// GET /live
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

async fn readiness(state: &AppState) -> HealthResponse {
    let indexed = state.gateway().has_retriever().await;

    if indexed {
        HealthResponse {
            document_indexed: Some(true),
            ..HealthResponse::healthy()
        }
    } else {
        HealthResponse {
            status: HealthStatus::Degraded,
            document_indexed: Some(false),
            message: Some("No document indexed, using web search"),
            ..HealthResponse::healthy()
        }
    }
}
