//! Task recipes and free-text matching.

mod catalog;
mod matcher;

pub use catalog::Recipe;
pub use matcher::{find_all, match_best, score, RecipeMatch, DEFAULT_THRESHOLD};

use crate::error::{EngineError, Result};
use crate::models::ModelSlug;

/// The whole catalog, in catalog order.
pub fn all_recipes() -> &'static [Recipe] {
    &catalog::RECIPES
}

pub fn recipe_by_slug(slug: &str) -> Result<&'static Recipe> {
    catalog::RECIPES
        .iter()
        .find(|r| r.slug == slug)
        .ok_or_else(|| EngineError::UnknownRecipe(slug.to_string()))
}

/// Recipes whose default or alternative models include `model`.
pub fn recipes_for_model(model: ModelSlug) -> Vec<&'static Recipe> {
    catalog::RECIPES.iter().filter(|r| r.supports(model)).collect()
}
