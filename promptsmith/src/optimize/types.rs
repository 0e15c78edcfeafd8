//! Optimisation request, result, issue and change types.

use serde::{Deserialize, Serialize};

use crate::models::ModelSlug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        }
    }
}

/// A stylistic defect found in a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Stable machine-readable code, e.g. `CLAUDE_THINK_WORD`.
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl Issue {
    pub(crate) fn new(
        severity: Severity,
        code: &str,
        message: impl Into<String>,
        fix: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.to_string(),
            message: message.into(),
            fix: Some(fix.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

/// One transformation the rewriter actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub description: String,
    pub reason: String,
}

impl Change {
    pub(crate) fn new(kind: ChangeKind, description: impl Into<String>, reason: &str) -> Self {
        Self {
            kind,
            description: description.into(),
            reason: reason.to_string(),
        }
    }
}

/// Output of a rewriter: the new text and the changes that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rewrite {
    pub text: String,
    pub changes: Vec<Change>,
}

impl Rewrite {
    pub(crate) fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            changes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub original_prompt: String,
    pub target_model: ModelSlug,
    /// Free-text issues reported by the user; each becomes a `USER_REPORTED` warning.
    #[serde(default)]
    pub issues: Vec<String>,
}

impl OptimizationRequest {
    pub fn new(original_prompt: impl Into<String>, target_model: ModelSlug) -> Self {
        Self {
            original_prompt: original_prompt.into(),
            target_model,
            issues: Vec::new(),
        }
    }

    pub fn with_issues<I, S>(mut self, issues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.issues = issues.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeforeAfter {
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_prompt: String,
    pub changes: Vec<Change>,
    pub issues: Vec<Issue>,
    pub before_after: BeforeAfter,
    /// `estimate_tokens(optimized) - estimate_tokens(original)`.
    pub token_delta: i64,
}
