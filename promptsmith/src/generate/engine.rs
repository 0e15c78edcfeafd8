//! Generation engine: three prompt variants per request.

use std::sync::Arc;

use super::{infer_task_type, GenerationRequest, GenerationResult, PromptVariant, Versions};
use super::{TaskType, VersionKind};
use crate::error::Result;
use crate::rules::RuleStore;
use crate::strategy::{self, ModelStrategy};
use crate::tokens::estimate_tokens;

/// Number of rule tips returned with each generation.
const TIPS_LIMIT: usize = 5;

/// Builds extended, standard and minimal prompts using the model's strategy and rules.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    store: Arc<RuleStore>,
}

impl GenerationEngine {
    pub fn new(store: Arc<RuleStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<RuleStore> {
        &self.store
    }

    /// Generates all three variants for `request`.
    ///
    /// # Errors
    ///
    /// [`EngineError::RulesLoad`](crate::EngineError::RulesLoad) when the model's knowledge
    /// document cannot be loaded.
    #[tracing::instrument(skip_all, fields(model = %request.model))]
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let task_type = self.resolve_task_type(request);
        let rules = self.store.get_rules(request.model)?;
        let strategy = strategy::for_model(request.model);

        let variant = |kind| build_variant(strategy, request, task_type, kind);
        let versions = Versions {
            extended: variant(VersionKind::Extended),
            standard: variant(VersionKind::Standard),
            minimal: variant(VersionKind::Minimal),
        };

        Ok(GenerationResult {
            versions,
            techniques: techniques(strategy, request, task_type),
            tips: rules.rules.tips.iter().take(TIPS_LIMIT).cloned().collect(),
            model: request.model,
            task_type,
        })
    }

    /// Generates only the variant of the given kind.
    #[tracing::instrument(skip_all, fields(model = %request.model, version = ?kind))]
    pub fn generate_single(
        &self,
        request: &GenerationRequest,
        kind: VersionKind,
    ) -> Result<PromptVariant> {
        let task_type = self.resolve_task_type(request);
        // Loaded for its failure mode: a model whose document is unreadable cannot generate.
        self.store.get_rules(request.model)?;
        Ok(build_variant(
            strategy::for_model(request.model),
            request,
            task_type,
            kind,
        ))
    }

    fn resolve_task_type(&self, request: &GenerationRequest) -> TaskType {
        let task_type = request
            .task_type
            .unwrap_or_else(|| infer_task_type(&request.goal));
        tracing::debug!(
            task_type = %task_type,
            explicit = request.task_type.is_some(),
            "resolved task type"
        );
        task_type
    }
}

fn build_variant(
    strategy: &ModelStrategy,
    request: &GenerationRequest,
    task_type: TaskType,
    kind: VersionKind,
) -> PromptVariant {
    let content = (strategy.build)(request, task_type, kind);
    PromptVariant {
        kind,
        token_estimate: estimate_tokens(&content),
        content,
    }
}

fn techniques(strategy: &ModelStrategy, request: &GenerationRequest, task: TaskType) -> Vec<String> {
    let mut out: Vec<String> = strategy.techniques.iter().map(|t| t.to_string()).collect();
    if !request.examples.is_empty() {
        out.push("Few-shot examples".to_string());
    }
    if !request.constraints.is_empty() {
        out.push("Explicit constraints".to_string());
    }
    if task.is_code_task() {
        out.push("Anti-overengineering directive".to_string());
    }
    out
}
