//! Engine errors.
//!
//! Raised by the rule store, the generation engine and the optimisation engine. Each variant
//! carries a stable string code and an HTTP status hint so the calling boundary can translate
//! it into a response without inspecting messages.

use thiserror::Error;

use crate::knowledge::ParseError;

/// Convenience alias used across the engine.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

/// Error returned by engine operations.
///
/// Parser failures are never surfaced directly: the rule store wraps them in
/// [`EngineError::RulesLoad`] together with the model slug that triggered the load.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Slug is not part of the static model registry.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// The knowledge document backing a model could not be loaded.
    #[error("failed to load rules for {model}: {source}")]
    RulesLoad {
        model: String,
        #[source]
        source: ParseError,
    },

    /// Slug is not part of the recipe catalog.
    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),
}

impl EngineError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnknownModel(_) => "UNKNOWN_MODEL",
            EngineError::RulesLoad { .. } => "RULES_LOAD_ERROR",
            EngineError::UnknownRecipe(_) => "UNKNOWN_RECIPE",
        }
    }

    /// HTTP status the boundary should answer with. `RulesLoad` inherits the parser's hint.
    pub fn status_hint(&self) -> u16 {
        match self {
            EngineError::UnknownModel(_) => 400,
            EngineError::RulesLoad { source, .. } => source.status_hint(),
            EngineError::UnknownRecipe(_) => 404,
        }
    }
}
