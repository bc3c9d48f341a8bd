//! Static option lists and the code complexity estimate

use crate::api::types::{ComplexityRequest, ComplexityResponse, Json, OptionsResponse};
use crate::domain::CodeComplexity;

/// GET /v1/options - Languages, skill levels, roles and example questions
pub async fn list_options() -> Json<OptionsResponse> {
    Json(OptionsResponse::default())
}

/// POST /v1/complexity - Line-count estimate, no remote call involved
pub async fn measure_complexity(
    Json(request): Json<ComplexityRequest>,
) -> Json<ComplexityResponse> {
    Json(CodeComplexity::measure(&request.code).into())
}
