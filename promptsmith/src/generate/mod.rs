//! Prompt generation: task-type inference, per-model builders and the engine that ties them to
//! the rule store.

pub(crate) mod builders;
mod engine;
mod infer;
mod types;

pub use builders::BuildFn;
pub use engine::GenerationEngine;
pub use infer::infer_task_type;
pub use types::{
    GenerationRequest, GenerationResult, PromptVariant, TaskType, Tone, VersionKind, Versions,
};
