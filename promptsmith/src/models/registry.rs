//! Static model registry: the eight supported models and the document behind each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Supported model slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelSlug {
    #[serde(rename = "claude-4.5")]
    Claude45,
    #[serde(rename = "gpt-5.2")]
    Gpt52,
    #[serde(rename = "grok-4.1")]
    Grok41,
    #[serde(rename = "gemini-3-pro")]
    Gemini3Pro,
    #[serde(rename = "nano-banana")]
    NanoBanana,
    #[serde(rename = "grok-aurora")]
    GrokAurora,
    #[serde(rename = "grok-imagine")]
    GrokImagine,
    #[serde(rename = "perplexity-pro")]
    PerplexityPro,
}

impl ModelSlug {
    /// Every slug, in registry order.
    pub const ALL: [ModelSlug; 8] = [
        ModelSlug::Claude45,
        ModelSlug::Gpt52,
        ModelSlug::Grok41,
        ModelSlug::Gemini3Pro,
        ModelSlug::NanoBanana,
        ModelSlug::GrokAurora,
        ModelSlug::GrokImagine,
        ModelSlug::PerplexityPro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelSlug::Claude45 => "claude-4.5",
            ModelSlug::Gpt52 => "gpt-5.2",
            ModelSlug::Grok41 => "grok-4.1",
            ModelSlug::Gemini3Pro => "gemini-3-pro",
            ModelSlug::NanoBanana => "nano-banana",
            ModelSlug::GrokAurora => "grok-aurora",
            ModelSlug::GrokImagine => "grok-imagine",
            ModelSlug::PerplexityPro => "perplexity-pro",
        }
    }

    /// Registry entry for this slug.
    pub fn descriptor(self) -> &'static ModelDescriptor {
        // REGISTRY is laid out in `ALL` order.
        &REGISTRY[self as usize]
    }
}

impl fmt::Display for ModelSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSlug {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelSlug::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| EngineError::UnknownModel(s.to_string()))
    }
}

/// Broad kind of model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelCategory {
    Llm,
    Image,
    Video,
    Search,
}

impl ModelCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelCategory::Llm => "llm",
            ModelCategory::Image => "image",
            ModelCategory::Video => "video",
            ModelCategory::Search => "search",
        }
    }
}

impl FromStr for ModelCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "llm" => Ok(ModelCategory::Llm),
            "image" => Ok(ModelCategory::Image),
            "video" => Ok(ModelCategory::Video),
            "search" => Ok(ModelCategory::Search),
            other => Err(format!("unknown model category: {other}")),
        }
    }
}

/// Immutable registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    pub slug: ModelSlug,
    pub name: &'static str,
    pub producer: &'static str,
    pub category: ModelCategory,
    pub specialization: &'static str,
    /// Knowledge document file name, relative to the knowledge directory.
    pub document: &'static str,
}

static REGISTRY: [ModelDescriptor; 8] = [
    ModelDescriptor {
        slug: ModelSlug::Claude45,
        name: "Claude 4.5 Opus/Sonnet",
        producer: "Anthropic",
        category: ModelCategory::Llm,
        specialization: "Highest quality, complex tasks",
        document: "claude-4.md",
    },
    ModelDescriptor {
        slug: ModelSlug::Gpt52,
        name: "ChatGPT 5.2",
        producer: "OpenAI",
        category: ModelCategory::Llm,
        specialization: "Precise, multi-step",
        document: "gpt-5.md",
    },
    ModelDescriptor {
        slug: ModelSlug::Grok41,
        name: "Grok 4.1",
        producer: "xAI",
        category: ModelCategory::Llm,
        specialization: "Current information, iterative",
        document: "grok-4.md",
    },
    ModelDescriptor {
        slug: ModelSlug::Gemini3Pro,
        name: "Gemini 3 Pro",
        producer: "Google",
        category: ModelCategory::Llm,
        specialization: "Multimodal, long context",
        document: "gemini-3.md",
    },
    ModelDescriptor {
        slug: ModelSlug::NanoBanana,
        name: "Nano Banana 2.5",
        producer: "Google DeepMind",
        category: ModelCategory::Image,
        specialization: "Image generation and editing",
        document: "nano-banana.md",
    },
    ModelDescriptor {
        slug: ModelSlug::GrokAurora,
        name: "Grok Aurora",
        producer: "xAI",
        category: ModelCategory::Image,
        specialization: "Photorealism, text in images",
        document: "grok-aurora.md",
    },
    ModelDescriptor {
        slug: ModelSlug::GrokImagine,
        name: "Grok Imagine",
        producer: "xAI",
        category: ModelCategory::Video,
        specialization: "6-15s video with audio",
        // shares the Aurora document
        document: "grok-aurora.md",
    },
    ModelDescriptor {
        slug: ModelSlug::PerplexityPro,
        name: "Perplexity Pro",
        producer: "Perplexity AI",
        category: ModelCategory::Search,
        specialization: "Search + Deep Research",
        document: "perplexity-pro.md",
    },
];

/// All registry entries, in registry order.
pub fn all_models() -> &'static [ModelDescriptor] {
    &REGISTRY
}

pub fn models_by_category(category: ModelCategory) -> Vec<&'static ModelDescriptor> {
    REGISTRY.iter().filter(|m| m.category == category).collect()
}

/// Registry entry for a slug string, or `None` when it is not registered.
pub fn model_info(slug: &str) -> Option<&'static ModelDescriptor> {
    slug.parse::<ModelSlug>().ok().map(ModelSlug::descriptor)
}

pub fn is_valid_model(slug: &str) -> bool {
    slug.parse::<ModelSlug>().is_ok()
}
