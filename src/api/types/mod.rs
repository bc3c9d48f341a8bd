//! API request, response and error types

pub mod error;
pub mod json;
pub mod workflow;

pub use error::{ApiError, ApiErrorKind, ApiErrorResponse};
pub use json::Json;
pub use workflow::{
    ClassifyQuestionRequest, ClassifyQuestionResponse, CommentRequest, CommentResponse,
    ComplexityRequest, ComplexityResponse, FullWorkflowRequest, FullWorkflowResponse,
    OptionsResponse, SemanticSearchRequest, SemanticSearchResponse, StepView, SubmissionBody,
};
