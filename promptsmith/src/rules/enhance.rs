//! Per-model mandatory rules, appended when the document does not already cover them.

use crate::knowledge::ExtractedRules;
use crate::models::ModelSlug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Avoid,
    Tips,
}

/// A rule that must be present: appended to `target` unless an entry already contains one of
/// `keywords` (lower-cased substring match).
struct Mandatory {
    target: Target,
    keywords: &'static [&'static str],
    text: &'static str,
}

const CLAUDE: &[Mandatory] = &[
    Mandatory {
        target: Target::Avoid,
        keywords: &["think"],
        text: "Avoid the word \"think\" (without extended thinking); use \"consider\", \"evaluate\" or \"assess\"",
    },
    Mandatory {
        target: Target::Tips,
        keywords: &["xml"],
        text: "Use XML tags for structure (<task>, <context>, <output_format>)",
    },
];

const GEMINI: &[Mandatory] = &[
    Mandatory {
        target: Target::Avoid,
        keywords: &["temperatur"],
        text: "Do NOT lower the temperature below 1.0; it causes looping and degraded output",
    },
    Mandatory {
        target: Target::Tips,
        keywords: &["30-50%"],
        text: "Shorten the prompt by 30-50% compared to other models",
    },
];

const GPT: &[Mandatory] = &[Mandatory {
    target: Target::Avoid,
    keywords: &["mixed", "mieszan"],
    text: "Avoid mixed signals (\"prefer X, but Y is fine too\"); pick one",
}];

const PERPLEXITY: &[Mandatory] = &[
    Mandatory {
        target: Target::Avoid,
        keywords: &["few-shot", "example"],
        text: "Do NOT use few-shot examples; they confuse the search engine",
    },
    Mandatory {
        target: Target::Avoid,
        keywords: &["role", "ekspert", "expert"],
        text: "Do NOT use role-playing (\"You are an expert...\"); it does not work with search",
    },
];

const NANO_BANANA: &[Mandatory] = &[Mandatory {
    target: Target::Avoid,
    keywords: &["technical", "techniczn"],
    text: "Avoid technical render parameters (octane render, unreal engine); describe the scene in natural language",
}];

const GROK_VISUAL: &[Mandatory] = &[
    Mandatory {
        target: Target::Tips,
        keywords: &["600-700"],
        text: "Optimal prompt length: 600-700 characters",
    },
    Mandatory {
        target: Target::Avoid,
        keywords: &["hand", "rąk"],
        text: "Avoid hands in the frame; they are often distorted",
    },
];

fn mandatory_for(model: ModelSlug) -> &'static [Mandatory] {
    match model {
        ModelSlug::Claude45 => CLAUDE,
        ModelSlug::Gemini3Pro => GEMINI,
        ModelSlug::Gpt52 => GPT,
        ModelSlug::PerplexityPro => PERPLEXITY,
        ModelSlug::NanoBanana => NANO_BANANA,
        ModelSlug::GrokAurora | ModelSlug::GrokImagine => GROK_VISUAL,
        ModelSlug::Grok41 => &[],
    }
}

fn covers(entries: &[String], keywords: &[&str]) -> bool {
    entries.iter().any(|entry| {
        let entry = entry.to_lowercase();
        keywords.iter().any(|k| entry.contains(k))
    })
}

/// Appends the model's mandatory rules that the document does not already cover.
///
/// Additive only: parsed entries are never edited or removed. Every mandatory text contains its
/// own keyword, so enhancing twice is the same as enhancing once.
pub(crate) fn enhance(model: ModelSlug, mut rules: ExtractedRules) -> ExtractedRules {
    for rule in mandatory_for(model) {
        let list = match rule.target {
            Target::Avoid => &mut rules.avoid,
            Target::Tips => &mut rules.tips,
        };
        if !covers(list, rule.keywords) {
            list.push(rule.text.to_string());
        }
    }
    rules
}
