//! Optimisation entry points.

use super::{BeforeAfter, Issue, OptimizationRequest, OptimizationResult, Severity};
use crate::models::ModelSlug;
use crate::strategy;
use crate::tokens::token_delta;

/// Code attached to every user-reported issue.
pub const USER_REPORTED: &str = "USER_REPORTED";

/// Detects issues in `request.original_prompt` and rewrites it for the target model.
///
/// Issues always describe the original prompt; the rewrite is applied independently. Running
/// `optimize` again on the optimised text does not re-report what the rewrite already fixed.
#[tracing::instrument(skip_all, fields(model = %request.target_model))]
pub fn optimize(request: &OptimizationRequest) -> OptimizationResult {
    let strategy = strategy::for_model(request.target_model);
    let original = request.original_prompt.as_str();

    let mut issues = (strategy.detect)(original);
    issues.extend(request.issues.iter().map(|reported| Issue {
        severity: Severity::Warning,
        code: USER_REPORTED.to_string(),
        message: reported.clone(),
        fix: None,
    }));

    let rewrite = (strategy.rewrite)(original);
    tracing::debug!(
        issues = issues.len(),
        changes = rewrite.changes.len(),
        "optimised prompt"
    );

    OptimizationResult {
        token_delta: token_delta(original, &rewrite.text),
        before_after: BeforeAfter {
            before: original.to_string(),
            after: rewrite.text.clone(),
        },
        optimized_prompt: rewrite.text,
        changes: rewrite.changes,
        issues,
    }
}

/// Issue detection alone, without rewriting.
pub fn analyze(prompt: &str, model: ModelSlug) -> Vec<Issue> {
    (strategy::for_model(model).detect)(prompt)
}
