//! Per-model prompt construction. Each builder is a pure function of the request, the resolved
//! task type and the version kind; every variant embeds the goal verbatim.

use super::{GenerationRequest, TaskType, VersionKind};

/// Signature shared by all builders.
pub type BuildFn = fn(&GenerationRequest, TaskType, VersionKind) -> String;

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tagged(tag: &str, body: &str) -> String {
    format!("<{tag}>\n{body}\n</{tag}>")
}

pub(crate) fn claude(req: &GenerationRequest, task: TaskType, kind: VersionKind) -> String {
    let mut parts = Vec::new();
    match kind {
        VersionKind::Extended => {
            if let Some(ctx) = req.context() {
                parts.push(tagged("context", ctx));
            }
            parts.push(tagged("task", &req.goal));
            if let Some(tone) = req.tone {
                parts.push(tagged("tone", tone.instruction()));
            }
            if !req.constraints.is_empty() {
                parts.push(tagged("constraints", &bullets(&req.constraints)));
            }
            parts.push(tagged(
                "output_format",
                "[Specify the expected response format]",
            ));
            if !req.examples.is_empty() {
                let examples = req
                    .examples
                    .iter()
                    .map(|e| format!("Example: {e}"))
                    .collect::<Vec<_>>()
                    .join("\n\n");
                parts.push(tagged("examples", &examples));
            }
            if task.is_code_task() {
                parts.push(tagged(
                    "avoid_overengineering",
                    "Avoid over-engineering. Only make the changes that were directly requested.\n\
                     Do not add features beyond the scope of the task.",
                ));
            }
        }
        VersionKind::Standard => {
            if let Some(ctx) = req.context() {
                parts.push(tagged("context", ctx));
            }
            parts.push(tagged("task", &req.goal));
            parts.push(tagged("output_format", "[Response format]"));
        }
        VersionKind::Minimal => parts.push(tagged("task", &req.goal)),
    }
    parts.join("\n\n")
}

pub(crate) fn gpt(req: &GenerationRequest, _task: TaskType, kind: VersionKind) -> String {
    let mut parts = Vec::new();
    match kind {
        VersionKind::Extended => {
            parts.push("## Role\nYou are an expert specialising in the task below.".to_string());
            if let Some(ctx) = req.context() {
                parts.push(format!("## Context\n{ctx}"));
            }
            parts.push(format!("## Task\n{}", req.goal));
            if let Some(tone) = req.tone {
                parts.push(format!("## Tone\n{}", tone.instruction()));
            }
            if !req.constraints.is_empty() {
                parts.push(format!("## Requirements\n{}", bullets(&req.constraints)));
            }
            parts.push("## Response format\n[Specify the expected format]".to_string());
            if !req.examples.is_empty() {
                let examples = req
                    .examples
                    .iter()
                    .map(|e| format!("Input: {e}\nOutput: [expected result]"))
                    .collect::<Vec<_>>()
                    .join("\n\n");
                parts.push(format!("## Examples\n{examples}"));
            }
        }
        VersionKind::Standard => {
            if let Some(ctx) = req.context() {
                parts.push(format!("## Context\n{ctx}"));
            }
            parts.push(format!("## Task\n{}", req.goal));
            // minimal carries the requirements, so standard must too
            if !req.constraints.is_empty() {
                parts.push(format!("## Requirements\n{}", bullets(&req.constraints)));
            }
            parts.push("## Response format\n[Specify the format]".to_string());
        }
        VersionKind::Minimal => {
            parts.push(req.goal.clone());
            if !req.constraints.is_empty() {
                parts.push(format!("Requirements: {}", req.constraints.join(", ")));
            }
        }
    }
    parts.join("\n\n")
}

/// Gemini prefers prompts 30-50% shorter, with the critical instructions at the end.
pub(crate) fn gemini(req: &GenerationRequest, _task: TaskType, kind: VersionKind) -> String {
    let mut parts = Vec::new();
    match kind {
        VersionKind::Extended => {
            parts.push("Role: Expert in carrying out the task".to_string());
            parts.push(format!("Goal: {}", req.goal));
            if let Some(ctx) = req.context() {
                parts.push(format!("Context: {ctx}"));
            }
            if let Some(tone) = req.tone {
                parts.push(format!("Tone: {}", tone.instruction()));
            }
            if !req.constraints.is_empty() {
                parts.push(format!("Constraints:\n{}", bullets(&req.constraints)));
            }
            parts.push("Format: [Specify the response format]".to_string());
        }
        VersionKind::Standard => {
            parts.push(format!("Goal: {}", req.goal));
            parts.push("Format: [Specify the format]".to_string());
        }
        VersionKind::Minimal => parts.push(req.goal.clone()),
    }
    parts.join("\n\n")
}

pub(crate) fn grok(req: &GenerationRequest, _task: TaskType, kind: VersionKind) -> String {
    let mut parts = Vec::new();
    match kind {
        VersionKind::Extended => {
            parts.push(format!("## Goal\n{}", req.goal));
            if let Some(ctx) = req.context() {
                parts.push(format!("## Context\n{ctx}"));
            }
            if let Some(tone) = req.tone {
                parts.push(format!("## Tone\n{}", tone.instruction()));
            }
            if !req.constraints.is_empty() {
                parts.push(format!("## Task details\n{}", bullets(&req.constraints)));
            }
            parts.push("## Expected output\n[Specify the format]".to_string());
        }
        VersionKind::Standard => {
            parts.push(format!("## Goal\n{}", req.goal));
            if let Some(ctx) = req.context() {
                parts.push(format!("## Context\n{ctx}"));
            }
        }
        // Grok works well iteratively: start bare and refine.
        VersionKind::Minimal => parts.push(req.goal.clone()),
    }
    parts.join("\n\n")
}

/// Search-style query: no role-playing, no few-shot examples.
pub(crate) fn perplexity(req: &GenerationRequest, _task: TaskType, kind: VersionKind) -> String {
    let mut lines = vec![req.goal.clone()];
    match kind {
        VersionKind::Extended => {
            if let Some(ctx) = req.context() {
                lines.push(format!("Context: {ctx}"));
            }
            lines.push("Time range: [e.g. 2024-2025]".to_string());
            lines.push("Sources: [e.g. official documentation, peer-reviewed]".to_string());
            lines.push("Format: [table/list/report]".to_string());
        }
        VersionKind::Standard => lines.push("Format: [specify the response format]".to_string()),
        VersionKind::Minimal => {}
    }
    lines.join("\n")
}

/// Natural-language scene description, never technical render parameters.
pub(crate) fn nano_banana(req: &GenerationRequest, _task: TaskType, kind: VersionKind) -> String {
    let lines = match kind {
        VersionKind::Extended => {
            let mut lines = vec![
                format!("[Main subject]: {}", req.goal),
                "[Action/Pose]: [what the subject is doing]".to_string(),
                "[Location]: [where the scene takes place]".to_string(),
                "[Lighting]: [e.g. golden hour, studio light]".to_string(),
                "[Style]: [e.g. photorealism, watercolour, anime]".to_string(),
                "[Mood]: [atmosphere of the image]".to_string(),
            ];
            if !req.constraints.is_empty() {
                lines.push(format!("[Details]: {}", req.constraints.join(", ")));
            }
            lines
        }
        VersionKind::Standard => vec![
            format!("{}.", req.goal.trim_end_matches('.')),
            "[Lighting and atmosphere]. [Style: photorealism/other].".to_string(),
        ],
        VersionKind::Minimal => vec![req.goal.clone()],
    };
    lines.join("\n")
}

/// Photographic layout: subject first, then style, mood, lighting and composition.
pub(crate) fn grok_aurora(req: &GenerationRequest, _task: TaskType, kind: VersionKind) -> String {
    let parts = match kind {
        VersionKind::Extended => {
            let mut details = vec![
                "sharp focus".to_string(),
                "[aspect ratio, e.g. 16:9]".to_string(),
            ];
            details.extend(req.constraints.iter().cloned());
            vec![
                format!("[Subject]: {}", req.goal),
                "[Style]: [photorealistic / editorial / cinematic]".to_string(),
                "[Mood]: [peaceful / dramatic / mysterious]".to_string(),
                "[Lighting]: [golden hour / studio lighting / neon]".to_string(),
                "[Composition]: [close-up / wide shot / rule of thirds]".to_string(),
                format!("[Details]: {}", details.join(", ")),
            ]
        }
        VersionKind::Standard => vec![format!(
            "{}, [lighting], [style], sharp focus, [aspect ratio, e.g. 16:9]",
            req.goal
        )],
        VersionKind::Minimal => vec![req.goal.clone()],
    };
    parts.join(", ")
}

/// Video layout: subject and motion, background and motion, camera and motion.
pub(crate) fn grok_imagine(req: &GenerationRequest, _task: TaskType, kind: VersionKind) -> String {
    let parts = match kind {
        VersionKind::Extended => vec![
            format!("[Subject + motion]: {}", req.goal),
            "[Background + motion]: [background with moving elements]".to_string(),
            "[Camera + motion]: [slow pan right / tracking shot / static]".to_string(),
            "[Style]: [cinematic / documentary / ASMR]".to_string(),
            "[Atmosphere]: [emotional mood]".to_string(),
        ],
        VersionKind::Standard => vec![format!(
            "{}, [camera movement], [style], [atmosphere]",
            req.goal
        )],
        VersionKind::Minimal => vec![req.goal.clone()],
    };
    parts.join(", ")
}
