//! Question answering endpoint

use axum::extract::State;
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::WorkflowOutcome;

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// POST /v1/ask
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<WorkflowOutcome>, ApiError> {
    debug!(question_len = request.question.len(), "Answering question");

    let outcome = state.controller.run(&request.question).await?;

    Ok(Json(outcome))
}
