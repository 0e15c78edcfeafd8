//! Per-model strategy table: how each model's prompts are built, checked and rewritten.
//!
//! One record per [`ModelSlug`], looked up by slug. Every function is pure, so each model's
//! policy can be tested on its own.

use crate::generate::{builders, BuildFn};
use crate::models::ModelSlug;
use crate::optimize::{detect, rewrite, DetectFn, RewriteFn};

pub struct ModelStrategy {
    pub slug: ModelSlug,
    /// Technique labels always reported for this model.
    pub techniques: &'static [&'static str],
    pub build: BuildFn,
    pub detect: DetectFn,
    pub rewrite: RewriteFn,
}

impl std::fmt::Debug for ModelStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelStrategy")
            .field("slug", &self.slug)
            .field("techniques", &self.techniques)
            .finish_non_exhaustive()
    }
}

/// Laid out in [`ModelSlug::ALL`] order.
static STRATEGIES: [ModelStrategy; 8] = [
    ModelStrategy {
        slug: ModelSlug::Claude45,
        techniques: &["XML tags for structure"],
        build: builders::claude,
        detect: detect::claude,
        rewrite: rewrite::claude,
    },
    ModelStrategy {
        slug: ModelSlug::Gpt52,
        techniques: &["Role-based prompting", "Markdown structure"],
        build: builders::gpt,
        detect: detect::gpt,
        rewrite: rewrite::gpt,
    },
    ModelStrategy {
        slug: ModelSlug::Grok41,
        techniques: &["Goal-first markdown sections"],
        build: builders::grok,
        detect: detect::length_only,
        rewrite: rewrite::identity,
    },
    ModelStrategy {
        slug: ModelSlug::Gemini3Pro,
        techniques: &["Shortened prompt (30-50% less)", "Critical instructions at end"],
        build: builders::gemini,
        detect: detect::gemini,
        rewrite: rewrite::gemini,
    },
    ModelStrategy {
        slug: ModelSlug::NanoBanana,
        techniques: &["Natural-language scene description"],
        build: builders::nano_banana,
        detect: detect::nano_banana,
        rewrite: rewrite::identity,
    },
    ModelStrategy {
        slug: ModelSlug::GrokAurora,
        techniques: &["Subject-first photographic description"],
        build: builders::grok_aurora,
        detect: detect::grok_visual,
        rewrite: rewrite::identity,
    },
    ModelStrategy {
        slug: ModelSlug::GrokImagine,
        techniques: &["Subject + motion + camera layout"],
        build: builders::grok_imagine,
        detect: detect::grok_visual,
        rewrite: rewrite::identity,
    },
    ModelStrategy {
        slug: ModelSlug::PerplexityPro,
        techniques: &["Search-style query"],
        build: builders::perplexity,
        detect: detect::perplexity,
        rewrite: rewrite::perplexity,
    },
];

/// Strategy record for `slug`.
pub fn for_model(slug: ModelSlug) -> &'static ModelStrategy {
    &STRATEGIES[slug as usize]
}
