//! Versioned code workflow endpoints

pub mod options;
pub mod questions;
pub mod workflows;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/options", get(options::list_options))
        .route("/complexity", post(options::measure_complexity))
        .route("/workflows/full", post(workflows::run_full_workflow))
        .route("/workflows/full/report", post(workflows::download_full_report))
        .route("/semantic-search", post(workflows::semantic_search))
        .route("/comments", post(workflows::generate_comments))
        .route("/questions/classify", post(questions::classify_question))
}
