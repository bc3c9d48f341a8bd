//! Question classification endpoint

use axum::extract::State;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ClassifyQuestionRequest, ClassifyQuestionResponse, Json};

/// POST /v1/questions/classify - Whether a question is about programming
pub async fn classify_question(
    State(state): State<AppState>,
    Json(request): Json<ClassifyQuestionRequest>,
) -> Result<Json<ClassifyQuestionResponse>, ApiError> {
    let is_coding_question = state
        .workflow_service
        .classify_question(&request.question)
        .await?;

    info!(is_coding_question, "Classified question");

    Ok(Json(ClassifyQuestionResponse { is_coding_question }))
}
