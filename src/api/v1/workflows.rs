//! Code workflow endpoints

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CommentRequest, CommentResponse, FullWorkflowRequest, FullWorkflowResponse, Json,
    SemanticSearchRequest, SemanticSearchResponse,
};
use crate::domain::WorkflowReport;

/// POST /v1/workflows/full - Explain, refactor, review, detect errors and
/// generate tests for the submitted code
pub async fn run_full_workflow(
    State(state): State<AppState>,
    Json(request): Json<FullWorkflowRequest>,
) -> Result<Json<FullWorkflowResponse>, ApiError> {
    let submission = request.submission.to_submission();
    let report = state
        .workflow_service
        .run_full_workflow(&submission, &request.options)
        .await?;

    info!(
        language = %submission.language(),
        steps = report.steps().len(),
        diff_lines = report.diff.lines().count(),
        "Full workflow served"
    );

    Ok(Json(FullWorkflowResponse::new(
        &report,
        submission.complexity(),
    )))
}

/// POST /v1/workflows/full/report - Same workflow, returned as a text
/// attachment
pub async fn download_full_report(
    State(state): State<AppState>,
    Json(request): Json<FullWorkflowRequest>,
) -> Result<Response, ApiError> {
    let submission = request.submission.to_submission();
    let report = state
        .workflow_service
        .run_full_workflow(&submission, &request.options)
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", WorkflowReport::FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.to_text(),
    )
        .into_response())
}

/// POST /v1/semantic-search - Answer a question about the submitted code
pub async fn semantic_search(
    State(state): State<AppState>,
    Json(request): Json<SemanticSearchRequest>,
) -> Result<Json<SemanticSearchResponse>, ApiError> {
    let submission = request.submission.to_submission();
    let step = state
        .workflow_service
        .run_semantic_search(&submission, &request.question, &request.options)
        .await?;

    Ok(Json(SemanticSearchResponse {
        answer: step.output.display_text(),
        success: step.output.is_success(),
    }))
}

/// POST /v1/comments - Return the code with explanatory comments added
pub async fn generate_comments(
    State(state): State<AppState>,
    Json(request): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let submission = request.submission.to_submission();
    let step = state
        .workflow_service
        .run_comment_generation(&submission)
        .await?;

    Ok(Json(CommentResponse {
        commented_code: step.output.display_text(),
        success: step.output.is_success(),
    }))
}
