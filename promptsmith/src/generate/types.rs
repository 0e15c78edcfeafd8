//! Generation request and result types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ModelSlug;

/// Category of the user's goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskType {
    CodeGeneration,
    CodeReview,
    Analysis,
    CreativeWriting,
    Translation,
    Summarization,
    SystemPrompt,
    ImageGeneration,
    VideoGeneration,
    Research,
    General,
}

impl TaskType {
    pub const ALL: [TaskType; 11] = [
        TaskType::CodeGeneration,
        TaskType::CodeReview,
        TaskType::Analysis,
        TaskType::CreativeWriting,
        TaskType::Translation,
        TaskType::Summarization,
        TaskType::SystemPrompt,
        TaskType::ImageGeneration,
        TaskType::VideoGeneration,
        TaskType::Research,
        TaskType::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::CodeGeneration => "code-generation",
            TaskType::CodeReview => "code-review",
            TaskType::Analysis => "analysis",
            TaskType::CreativeWriting => "creative-writing",
            TaskType::Translation => "translation",
            TaskType::Summarization => "summarization",
            TaskType::SystemPrompt => "system-prompt",
            TaskType::ImageGeneration => "image-generation",
            TaskType::VideoGeneration => "video-generation",
            TaskType::Research => "research",
            TaskType::General => "general",
        }
    }

    /// Code tasks get an explicit anti-overengineering directive.
    pub fn is_code_task(self) -> bool {
        matches!(self, TaskType::CodeGeneration | TaskType::CodeReview)
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown task type: {s}"))
    }
}

/// Requested register of the generated prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
    Technical,
    Concise,
}

impl Tone {
    /// Instruction line inserted into extended text-model variants.
    pub fn instruction(self) -> &'static str {
        match self {
            Tone::Formal => "Use a formal, professional register.",
            Tone::Casual => "Use a casual, conversational register.",
            Tone::Technical => "Be technical and precise; domain terminology is welcome.",
            Tone::Concise => "Be concise; no filler.",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formal" => Ok(Tone::Formal),
            "casual" => Ok(Tone::Casual),
            "technical" => Ok(Tone::Technical),
            "concise" => Ok(Tone::Concise),
            other => Err(format!("unknown tone: {other}")),
        }
    }
}

/// Level of detail of a generated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionKind {
    Extended,
    Standard,
    Minimal,
}

impl VersionKind {
    pub const ALL: [VersionKind; 3] = [
        VersionKind::Extended,
        VersionKind::Standard,
        VersionKind::Minimal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VersionKind::Extended => "extended",
            VersionKind::Standard => "standard",
            VersionKind::Minimal => "minimal",
        }
    }
}

impl FromStr for VersionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extended" => Ok(VersionKind::Extended),
            "standard" => Ok(VersionKind::Standard),
            "minimal" => Ok(VersionKind::Minimal),
            other => Err(format!("unknown version: {other}")),
        }
    }
}

/// Input to [`GenerationEngine::generate`](super::GenerationEngine::generate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub goal: String,
    pub model: ModelSlug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl GenerationRequest {
    pub fn new(goal: impl Into<String>, model: ModelSlug) -> Self {
        Self {
            goal: goal.into(),
            model,
            task_type: None,
            context: None,
            tone: None,
            constraints: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Some(task_type);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn with_constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Context, treating an empty string as absent.
    pub(crate) fn context(&self) -> Option<&str> {
        self.context.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// One generated prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptVariant {
    #[serde(rename = "version")]
    pub kind: VersionKind,
    pub content: String,
    pub token_estimate: usize,
}

/// The three variants of one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versions {
    pub extended: PromptVariant,
    pub standard: PromptVariant,
    pub minimal: PromptVariant,
}

impl Versions {
    pub fn get(&self, kind: VersionKind) -> &PromptVariant {
        match kind {
            VersionKind::Extended => &self.extended,
            VersionKind::Standard => &self.standard,
            VersionKind::Minimal => &self.minimal,
        }
    }

    /// Variants from most to least detailed.
    pub fn iter(&self) -> impl Iterator<Item = &PromptVariant> {
        [&self.extended, &self.standard, &self.minimal].into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub versions: Versions,
    pub techniques: Vec<String>,
    pub tips: Vec<String>,
    pub model: ModelSlug,
    pub task_type: TaskType,
}
