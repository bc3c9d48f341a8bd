//! Code workflow domain models

mod entity;

pub use entity::{ReportMetadata, WorkflowReport, WorkflowStep, WorkflowStepName};
