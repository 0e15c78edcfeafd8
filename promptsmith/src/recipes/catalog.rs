//! Static recipe catalog. Keywords are bilingual (English and Polish) and matched lower-cased.

use serde::Serialize;

use crate::models::ModelSlug;

/// A pre-authored task template with keywords for free-text matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default_model: ModelSlug,
    pub alternative_models: &'static [ModelSlug],
    pub keywords: &'static [&'static str],
    pub follow_up_questions: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<&'static str>,
}

impl Recipe {
    /// Whether `model` is the default or one of the alternatives.
    pub fn supports(&self, model: ModelSlug) -> bool {
        self.default_model == model || self.alternative_models.contains(&model)
    }
}

pub(crate) static RECIPES: [Recipe; 10] = [
    Recipe {
        slug: "code-review",
        name: "Code review",
        description: "Review code for bugs, performance and best practices",
        default_model: ModelSlug::Claude45,
        alternative_models: &[ModelSlug::Gpt52, ModelSlug::Grok41],
        keywords: &[
            "code review",
            "review kodu",
            "review",
            "przejrzyj kod",
            "sprawdz kod",
            "analiza kodu",
            "bug",
            "wydajnosc",
            "refactor",
            "optymalizacja",
        ],
        follow_up_questions: &[
            "Which programming language is the code in?",
            "What matters most to you? (bugs, performance, readability, security)",
            "Is this production code or a prototype?",
        ],
        template: Some(
            "<context>
Project: [project name]
Technology: [tech stack]
Role of the code: [what this fragment does]
</context>

<task>
Review the code for:
- [criteria to analyse]
</task>

<code>
[paste code]
</code>

<output_format>
## Summary
[1-2 sentences]

## Critical problems
[list with suggested fixes]

## Optimisation suggestions
[list]
</output_format>",
        ),
    },
    Recipe {
        slug: "system-prompt",
        name: "System prompt",
        description: "Create a system prompt for a chatbot or AI assistant",
        default_model: ModelSlug::Claude45,
        alternative_models: &[ModelSlug::Gpt52],
        keywords: &[
            "system prompt",
            "chatbot",
            "asystent",
            "bot",
            "persona",
            "rola",
            "zachowanie",
            "character",
        ],
        follow_up_questions: &[
            "What role or persona should the assistant have?",
            "For which company or project?",
            "What tone of communication? (formal/casual/technical)",
            "What are the assistant's main tasks?",
        ],
        template: Some(
            "## Role
You are [role/persona] specialising in [domain].

## Context
[Background, audience, environment]

## Main tasks
- [Task 1]
- [Task 2]
- [Task 3]

## Communication style
- Tone: [formal/casual/technical]
- Length: [concise/detailed]

## Limits
- [What not to do]
- [Topics to avoid]",
        ),
    },
    Recipe {
        slug: "image-generation",
        name: "Image generation",
        description: "Create a prompt for generating an image",
        default_model: ModelSlug::NanoBanana,
        alternative_models: &[ModelSlug::GrokAurora],
        keywords: &[
            "obraz",
            "zdjecie",
            "grafika",
            "ilustracja",
            "image",
            "picture",
            "wygeneruj obraz",
            "stworz grafike",
            "art",
        ],
        follow_up_questions: &[
            "What should the image show?",
            "Which style? (photorealism, anime, watercolour, etc.)",
            "What lighting or time of day?",
            "What mood or atmosphere?",
        ],
        template: Some(
            "[Main subject] in [location].
[Lighting] and [atmosphere].
Style: [style name].",
        ),
    },
    Recipe {
        slug: "research",
        name: "Research / Analysis",
        description: "Research a topic across many sources with verification",
        default_model: ModelSlug::PerplexityPro,
        alternative_models: &[ModelSlug::Claude45],
        keywords: &[
            "research",
            "badanie",
            "analiza rynku",
            "raport",
            "deep research",
            "zrodla",
            "publikacje",
            "academic",
            "sprawdz",
            "znajdz informacje",
        ],
        follow_up_questions: &[
            "What topic should be researched?",
            "What time range? (e.g. 2024-2025)",
            "Which kinds of sources do you prefer? (academic, industry, official)",
            "What report format?",
        ],
        template: Some(
            "[Research question]

Time range: [e.g. 2024-2025]
Sources: [e.g. peer-reviewed, official documentation]
Format: [table/list/report]

Include different perspectives and cite sources.",
        ),
    },
    Recipe {
        slug: "video-generation",
        name: "Video generation",
        description: "Create a prompt for generating short video clips",
        default_model: ModelSlug::GrokImagine,
        alternative_models: &[],
        keywords: &[
            "wideo",
            "video",
            "animacja",
            "clip",
            "film",
            "ruch",
            "motion",
        ],
        follow_up_questions: &[
            "What should the video show?",
            "How does the subject move?",
            "What camera movement? (static, pan, tracking)",
            "What mood or style?",
        ],
        template: Some(
            "[Subject + motion], [background + motion],
[camera movement: slow pan right / tracking / static],
[style: cinematic / documentary], [atmosphere]",
        ),
    },
    Recipe {
        slug: "portrait",
        name: "Portrait / Profile photo",
        description: "Create a photorealistic portrait or profile photo",
        default_model: ModelSlug::GrokAurora,
        alternative_models: &[ModelSlug::NanoBanana],
        keywords: &[
            "portret",
            "portrait",
            "headshot",
            "zdjecie profilowe",
            "twarz",
            "osoba",
            "fotografia portretowa",
        ],
        follow_up_questions: &[
            "Who should the portrait show?",
            "What kind of shot? (headshot, waist-up, full body)",
            "Which style? (professional, artistic, casual)",
            "What background or location?",
        ],
        template: Some(
            "Professional [shot type] of [person description],
[background], [lighting: natural window lighting / studio],
sharp focus on eyes, [style: corporate / editorial],
[additional details]",
        ),
    },
    Recipe {
        slug: "translation",
        name: "Translation",
        description: "Translate text while keeping its style and context",
        default_model: ModelSlug::Gpt52,
        alternative_models: &[ModelSlug::Claude45, ModelSlug::Gemini3Pro],
        keywords: &[
            "tlumaczenie",
            "przetlumacz",
            "translate",
            "translation",
            "z polskiego",
            "na polski",
            "z angielskiego",
        ],
        follow_up_questions: &[
            "From which language into which?",
            "Which style? (formal/casual/technical)",
            "Where will the text be used? (website, document, UI)",
        ],
        template: Some(
            "Translate the text below from [source language] into [target language].

Style: [formal/casual/technical]
Context: [where it will be used]

Text:
[text to translate]

Keep the formatting and technical terms.",
        ),
    },
    Recipe {
        slug: "summarization",
        name: "Summary",
        description: "Summarise a text or document",
        default_model: ModelSlug::Claude45,
        alternative_models: &[ModelSlug::Gpt52, ModelSlug::Gemini3Pro],
        keywords: &[
            "podsumowanie",
            "streszczenie",
            "summarize",
            "summary",
            "skrot",
            "w skrocie",
            "tldr",
        ],
        follow_up_questions: &[
            "How long should the summary be? (sentences/bullets/paragraphs)",
            "What should it focus on? (conclusions/facts/decisions)",
            "Who is the summary for?",
        ],
        template: Some(
            "Summarise the text below.

Length: [e.g. 3-5 sentences / 5 bullets]
Focus: [main conclusions / facts / decisions]
Format: [prose / list / table]

Text:
[text to summarise]",
        ),
    },
    Recipe {
        slug: "debugging",
        name: "Debugging",
        description: "Find and fix a bug in code",
        default_model: ModelSlug::Claude45,
        alternative_models: &[ModelSlug::Gpt52, ModelSlug::Grok41],
        keywords: &[
            "debug",
            "debugowanie",
            "bug",
            "blad",
            "error",
            "nie dziala",
            "problem z kodem",
            "napraw",
            "fix",
        ],
        follow_up_questions: &[
            "What is the expected behaviour?",
            "What happens instead?",
            "What is the error message (if any)?",
            "What have you already tried?",
        ],
        template: Some(
            "I have a problem with my code:

Expected behaviour:
[what should happen]

Actual behaviour:
[what happens]

Error message (if any):
```
[error]
```

Code:
```[language]
[code with the bug]
```

Already tried:
- [attempt 1]
- [attempt 2]

Help diagnose the cause and propose a fix.",
        ),
    },
    Recipe {
        slug: "fact-check",
        name: "Fact check",
        description: "Check whether a claim is true",
        default_model: ModelSlug::PerplexityPro,
        alternative_models: &[],
        keywords: &[
            "sprawdz",
            "zweryfikuj",
            "fact check",
            "czy to prawda",
            "potwierdz",
            "prawdziwosc",
        ],
        follow_up_questions: &[
            "Which claim do you want to verify?",
            "Which sources do you prefer? (academic, official)",
        ],
        template: Some(
            "Verify the claim: \"[claim]\"

Find sources that confirm and contradict it.
Judge credibility by the quality of the sources.
Give a clear verdict: TRUE / FALSE / PARTLY TRUE.",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = RECIPES.iter().map(|r| r.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), RECIPES.len());
    }

    #[test]
    fn keywords_are_lowercase_and_non_empty() {
        for recipe in &RECIPES {
            assert!(!recipe.keywords.is_empty(), "{}", recipe.slug);
            for k in recipe.keywords {
                assert_eq!(*k, k.to_lowercase(), "{}: {}", recipe.slug, k);
            }
        }
    }

    #[test]
    fn default_model_is_never_an_alternative() {
        for recipe in &RECIPES {
            assert!(!recipe.alternative_models.contains(&recipe.default_model));
        }
    }
}
