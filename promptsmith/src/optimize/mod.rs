//! Prompt optimisation: per-model issue detection and rewriting.

pub(crate) mod detect;
mod engine;
pub(crate) mod rewrite;
mod types;

pub use detect::DetectFn;
pub use engine::{analyze, optimize, USER_REPORTED};
pub use rewrite::RewriteFn;
pub use types::{
    BeforeAfter, Change, ChangeKind, Issue, OptimizationRequest, OptimizationResult, Rewrite,
    Severity,
};
