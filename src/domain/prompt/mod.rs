//! Prompt assembly for the code workflows

mod builder;
mod filter;

pub use builder::{PromptBuilder, SYSTEM_PROMPT};
pub use filter::{CodeFilter, FenceFilter, PassthroughFilter};
