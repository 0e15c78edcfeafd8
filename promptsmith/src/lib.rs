//! # Promptsmith
//!
//! A rule-based prompt engine for text, image, video and search models. Per-model prompting
//! knowledge lives in markdown documents; the engine parses them into rules and uses those rules
//! to **generate** prompts from a goal and to **optimise** prompts the user already wrote.
//!
//! ## Features
//!
//! - **Knowledge parsing**: Markdown documents split into sections, a TL;DR block (rules, avoid
//!   list, quick start) and a checklist ([`parse_file`], [`parse_text`], [`extract_rules`]).
//! - **Rule store**: Per-model rules cached with a TTL on an injectable [`Clock`] ([`RuleStore`]).
//! - **Generation**: Extended, standard and minimal prompt variants per model with task-type
//!   inference ([`GenerationEngine`], [`infer_task_type`]).
//! - **Optimisation**: Model-specific issue detection and rewriting with a token delta
//!   ([`optimize`], [`analyze`]).
//! - **Recipes**: A catalog of ready-made prompt recipes and keyword matching ([`match_best`]).
//!
//! ## Main modules
//!
//! - [`knowledge`]: [`ParsedDocument`], [`KnowledgeSource`], [`DirectorySource`], [`EmbeddedSource`].
//! - [`models`]: [`ModelSlug`], [`ModelDescriptor`], registry lookups and the comparison table.
//! - [`rules`]: [`RuleStore`], [`CachedRules`], [`Clock`], [`ManualClock`].
//! - [`generate`]: [`GenerationRequest`], [`GenerationResult`], [`GenerationEngine`].
//! - [`optimize`]: [`OptimizationRequest`], [`OptimizationResult`], [`Issue`], [`Change`].
//! - [`recipes`]: [`Recipe`], [`RecipeMatch`].
//! - [`strategy`]: Per-model builder, detector and rewriter table.
//!
//! The library emits `tracing` events and never installs a subscriber.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use promptsmith::{
//!     optimize, GenerationEngine, GenerationRequest, ModelSlug, OptimizationRequest, RuleStore,
//!     DEFAULT_TTL,
//! };
//!
//! let store = Arc::new(RuleStore::embedded(DEFAULT_TTL));
//! let engine = GenerationEngine::new(store);
//!
//! let request = GenerationRequest::new("Write code to implement binary search", ModelSlug::Claude45);
//! let result = engine.generate(&request).unwrap();
//! assert!(!result.versions.minimal.content.is_empty());
//!
//! let fixed = optimize(&OptimizationRequest::new(
//!     "Think about how to improve this text",
//!     ModelSlug::Claude45,
//! ));
//! assert!(fixed.issues.iter().any(|i| i.code == "CLAUDE_THINK_WORD"));
//! ```

pub mod error;
pub mod generate;
pub mod knowledge;
pub mod models;
pub mod optimize;
pub mod recipes;
pub mod rules;
pub mod strategy;
pub mod tokens;

use std::path::PathBuf;

pub use error::{EngineError, Result};
pub use generate::{
    infer_task_type, GenerationEngine, GenerationRequest, GenerationResult, PromptVariant,
    TaskType, Tone, VersionKind, Versions,
};
pub use knowledge::{
    extract_rules, parse_file, parse_text, DirectorySource, EmbeddedSource, ExtractedRules,
    KnowledgeSource, ParseError, ParsedDocument,
};
pub use models::{
    all_models, comparison_table, model_info, models_by_category, ModelCategory, ModelDescriptor,
    ModelSlug,
};
pub use optimize::{
    analyze, optimize, BeforeAfter, Change, ChangeKind, Issue, OptimizationRequest,
    OptimizationResult, Severity,
};
pub use recipes::{
    all_recipes, find_all, match_best, recipe_by_slug, recipes_for_model, Recipe, RecipeMatch,
};
pub use rules::{CachedRules, Clock, ManualClock, RuleStore, RuleStoreConfig, DEFAULT_TTL};
pub use tokens::{estimate_tokens, token_delta};

/// Alias kept for callers that prefer `promptsmith::Error`.
pub type Error = EngineError;

/// Path of the knowledge documents shipped in this crate's source tree.
///
/// Only meaningful on the machine that built the crate; installed binaries use
/// [`EmbeddedSource`] instead.
pub fn bundled_knowledge_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("knowledge")
}
