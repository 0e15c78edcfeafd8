//! Model registry and cross-model comparison.

mod comparison;
mod registry;

pub use comparison::{comparison_table, ComparisonTable};
pub use registry::{
    all_models, is_valid_model, model_info, models_by_category, ModelCategory, ModelDescriptor,
    ModelSlug,
};
