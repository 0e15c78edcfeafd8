//! Per-model issue detectors. Each is an ordered list of pattern checks producing at most one
//! issue per check. Lengths are measured in characters.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Issue, Severity};

/// Signature shared by all detectors.
pub type DetectFn = fn(&str) -> Vec<Issue>;

/// Prompts longer than this are worth iterating on instead of writing in one go.
const ITERATE_THRESHOLD: usize = 1000;
const CLAUDE_XML_THRESHOLD: usize = 200;
const GPT_STRUCTURE_THRESHOLD: usize = 300;
const GEMINI_LENGTH_THRESHOLD: usize = 500;
const GROK_VISUAL_LENGTH_THRESHOLD: usize = 700;

static THINK_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bthink(?:ing)?\b").expect("valid regex"));

static XML_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<\w+>.*</\w+>").expect("valid regex"));

static MIXED_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)preferuj[^,]*,?\s*(ale|jednak|chociaz)",
        r"(?i)uzyj[^,]*,?\s*(ale mozesz|opcjonalnie)",
        r"(?i)domyslnie[^,]*,?\s*(ale|jednak)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

const VAGUE_PHRASES: &[&str] = &["mozesz", "sprobuj", "jesli chcesz"];

const MANUAL_COT_PHRASES: &[&str] = &["krok po kroku", "step by step"];

/// Words that mark the closing paragraph as an output instruction.
const CLOSING_INSTRUCTION_WORDS: &[&str] = &["format", "output", "odpowiedz"];

const ROLE_PHRASES: &[&str] = &["jestes ekspertem", "you are an expert", "as a"];

const EXAMPLE_MARKERS: &[&str] = &["Przykład:", "Przyklad:", "Example:"];

const URL_PHRASES: &[&str] = &["podaj link", "url", "podaj adres"];

const TECHNICAL_TERMS: &[&str] = &[
    "octane render",
    "unreal engine",
    "8k uhd",
    "hyperdetailed",
    "volumetric lighting",
    "f/1.8",
    "35mm lens",
];

const NEGATIVE_MARKERS: &[&str] = &["no ", "bez ", "without"];

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Long-prompt check used for models without a dedicated detector.
pub(crate) fn length_only(prompt: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    if prompt.chars().count() > ITERATE_THRESHOLD {
        issues.push(Issue::new(
            Severity::Suggestion,
            "GROK_ITERATE",
            "Long prompt; consider an iterative approach",
            "Grok is fast: iterate on a short prompt instead of writing everything at once",
        ));
    }
    issues
}

pub(crate) fn claude(prompt: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    let think_count = THINK_WORD.find_iter(prompt).count();
    if think_count > 0 {
        issues.push(Issue::new(
            Severity::Critical,
            "CLAUDE_THINK_WORD",
            format!(
                "Found the word \"think\" ({think_count}x); it can cause problems without extended thinking"
            ),
            "Replace \"think\" with \"consider\", \"evaluate\" or \"assess\"",
        ));
    }

    if !XML_PAIR.is_match(prompt) && prompt.chars().count() > CLAUDE_XML_THRESHOLD {
        issues.push(Issue::new(
            Severity::Suggestion,
            "CLAUDE_NO_XML",
            "No XML structure; Claude 4.5 responds better to XML tags",
            "Add tags such as <context>, <task>, <output_format>",
        ));
    }

    if contains_any(prompt, VAGUE_PHRASES) {
        issues.push(Issue::new(
            Severity::Warning,
            "CLAUDE_VAGUE_INSTRUCTIONS",
            "Vague instructions; Claude 4.5 needs explicit instructions",
            "Replace \"mozesz\"/\"sprobuj\" with concrete commands",
        ));
    }

    issues
}

pub(crate) fn gpt(prompt: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if MIXED_SIGNALS.iter().any(|re| re.is_match(prompt)) {
        issues.push(Issue::new(
            Severity::Critical,
            "GPT_MIXED_SIGNALS",
            "Mixed signals detected; GPT-5.2 may get confused",
            "Pick one option instead of \"prefer X, but Y is fine too\"",
        ));
    }

    if prompt.chars().count() > GPT_STRUCTURE_THRESHOLD && !prompt.contains('#') {
        issues.push(Issue::new(
            Severity::Suggestion,
            "GPT_NO_STRUCTURE",
            "Long prompt without Markdown structure",
            "Add ## headings for better organisation",
        ));
    }

    issues
}

pub(crate) fn gemini(prompt: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let lower = prompt.to_lowercase();

    if prompt.chars().count() > GEMINI_LENGTH_THRESHOLD {
        issues.push(Issue::new(
            Severity::Warning,
            "GEMINI_TOO_LONG",
            "Prompt may be too long for Gemini 3; 30-50% shorter is recommended",
            "Shorten the prompt by removing redundancy",
        ));
    }

    if contains_any(&lower, MANUAL_COT_PHRASES) {
        issues.push(Issue::new(
            Severity::Suggestion,
            "GEMINI_MANUAL_COT",
            "Manual chain-of-thought; Gemini has a built-in thinking_level",
            "Use the thinking_level: \"high\" API parameter instead of \"step by step\"",
        ));
    }

    if !contains_any(closing_paragraph(&lower), CLOSING_INSTRUCTION_WORDS) {
        issues.push(Issue::new(
            Severity::Suggestion,
            "GEMINI_INSTRUCTIONS_POSITION",
            "Key instructions should come at the end",
            "Move the response format and constraints to the end of the prompt",
        ));
    }

    issues
}

/// Text after the last blank line. A moved `Format:` block lands here as a whole.
fn closing_paragraph(text: &str) -> &str {
    let text = text.trim_end();
    text.rsplit_once("\n\n").map_or(text, |(_, last)| last)
}

pub(crate) fn perplexity(prompt: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let lower = prompt.to_lowercase();

    if contains_any(&lower, ROLE_PHRASES) {
        issues.push(Issue::new(
            Severity::Critical,
            "PERPLEXITY_ROLE_PLAYING",
            "Role-playing does not work with Perplexity; it is a search engine, not a chatbot",
            "Remove \"You are an expert...\" and phrase the prompt as a search question",
        ));
    }

    if contains_any(prompt, EXAMPLE_MARKERS)
        || (prompt.contains("Input:") && prompt.contains("Output:"))
    {
        issues.push(Issue::new(
            Severity::Critical,
            "PERPLEXITY_FEW_SHOT",
            "Few-shot examples confuse Perplexity; it searches for the examples instead of answering",
            "Remove the examples and ask the question directly",
        ));
    }

    if contains_any(&lower, URL_PHRASES) {
        issues.push(Issue::new(
            Severity::Warning,
            "PERPLEXITY_URL_REQUEST",
            "Request for URLs; the model may hallucinate links",
            "Do not ask for URLs; sources are attached automatically",
        ));
    }

    issues
}

pub(crate) fn nano_banana(prompt: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let lower = prompt.to_lowercase();

    if let Some(term) = TECHNICAL_TERMS.iter().find(|t| lower.contains(*t)) {
        issues.push(Issue::new(
            Severity::Warning,
            "NANO_BANANA_TECHNICAL",
            format!("Technical term \"{term}\" used; Nano Banana prefers natural language"),
            "Replace technical parameters with plain descriptions",
        ));
    }

    if contains_any(prompt, NEGATIVE_MARKERS) {
        issues.push(Issue::new(
            Severity::Suggestion,
            "NANO_BANANA_NEGATIVE",
            "Negative prompts (e.g. \"no blur\") do not work with Nano Banana",
            "Describe what you WANT to see instead of what to avoid",
        ));
    }

    issues
}

/// Shared by Grok Aurora (image) and Grok Imagine (video).
pub(crate) fn grok_visual(prompt: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let lower = prompt.to_lowercase();
    let len = prompt.chars().count();

    if len > GROK_VISUAL_LENGTH_THRESHOLD {
        issues.push(Issue::new(
            Severity::Warning,
            "GROK_IMAGE_TOO_LONG",
            format!("Prompt too long ({len} characters); 600-700 is optimal"),
            "Shorten the prompt to 600-700 characters",
        ));
    }

    if lower.contains("hand") || lower.contains("ręk") {
        issues.push(Issue::new(
            Severity::Suggestion,
            "GROK_IMAGE_HANDS",
            "Hands are often distorted in AI art",
            "Consider hiding the hands or framing without them",
        ));
    }

    if lower.contains("text") || lower.contains("napis") {
        issues.push(Issue::new(
            Severity::Suggestion,
            "GROK_IMAGE_TEXT",
            "Text in images often contains errors",
            "Add the text in post-production or accept possible errors",
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn claude_counts_think_words() {
        let issues = claude("Think about it. I think thinking helps. Rethink nothing.");
        assert_eq!(issues[0].code, "CLAUDE_THINK_WORD");
        assert_eq!(issues[0].severity, Severity::Critical);
        // "Rethink" is not a standalone word
        assert!(issues[0].message.contains("(3x)"), "{}", issues[0].message);
    }

    #[test]
    fn claude_short_prompt_needs_no_xml() {
        assert!(claude("Summarise the report.").is_empty());
        let long = "Summarise the report. ".repeat(12);
        assert_eq!(codes(&claude(&long)), vec!["CLAUDE_NO_XML"]);
        let tagged = format!("<task>{long}</task>");
        assert!(claude(&tagged).is_empty());
    }

    #[test]
    fn claude_vague_phrases() {
        assert_eq!(
            codes(&claude("sprobuj to naprawic")),
            vec!["CLAUDE_VAGUE_INSTRUCTIONS"]
        );
    }

    #[test]
    fn gpt_mixed_signals() {
        assert_eq!(
            codes(&gpt("preferuj TypeScript, ale JavaScript tez ok")),
            vec!["GPT_MIXED_SIGNALS"]
        );
        assert_eq!(
            codes(&gpt("domyslnie spacje, jednak taby tez")),
            vec!["GPT_MIXED_SIGNALS"]
        );
        assert!(gpt("Prefer tabs, but spaces are fine too.").is_empty());
        assert!(gpt("Use tabs.").is_empty());
    }

    #[test]
    fn claude_vague_phrases_are_the_polish_ones() {
        assert!(claude("You could try to list the colours if you want").is_empty());
    }

    #[test]
    fn gpt_structure_only_for_long_unheaded_prompts() {
        let long = "word ".repeat(70);
        assert_eq!(codes(&gpt(&long)), vec!["GPT_NO_STRUCTURE"]);
        assert!(gpt(&format!("# Task\n{long}")).is_empty());
    }

    #[test]
    fn gemini_wants_format_last() {
        assert_eq!(
            codes(&gemini("Format: JSON\n\nList three colours")),
            vec!["GEMINI_INSTRUCTIONS_POSITION"]
        );
        assert!(gemini("List three colours\n\nFormat: JSON\n").is_empty());
    }

    #[test]
    fn gemini_multi_line_format_block_counts_as_closing() {
        let moved = "List the primary colours\n\nFormat:\n- bullet list\n- max 5 items";
        assert!(gemini(moved).is_empty());
        assert_eq!(
            codes(&gemini("Format:\n- bullet list\n\nList the primary colours")),
            vec!["GEMINI_INSTRUCTIONS_POSITION"]
        );
        assert_eq!(
            codes(&gemini("List the colours\n\nKeep the response short")),
            vec!["GEMINI_INSTRUCTIONS_POSITION"]
        );
    }

    #[test]
    fn gemini_manual_cot_and_length() {
        let prompt = format!("{} step by step. Output: list", "x".repeat(500));
        assert_eq!(
            codes(&gemini(&prompt)),
            vec!["GEMINI_TOO_LONG", "GEMINI_MANUAL_COT"]
        );
    }

    #[test]
    fn perplexity_checks() {
        let issues = perplexity("You are an expert. Example: foo. Give me the URL.");
        assert_eq!(
            codes(&issues),
            vec![
                "PERPLEXITY_ROLE_PLAYING",
                "PERPLEXITY_FEW_SHOT",
                "PERPLEXITY_URL_REQUEST"
            ]
        );
        assert_eq!(
            codes(&perplexity("Input: 1\nOutput: 2")),
            vec!["PERPLEXITY_FEW_SHOT"]
        );
        assert_eq!(
            codes(&perplexity("Przykład: coś")),
            vec!["PERPLEXITY_FEW_SHOT"]
        );
        assert!(perplexity("Latest EU AI regulation changes 2025").is_empty());
    }

    #[test]
    fn nano_banana_reports_first_technical_term_only() {
        let issues = nano_banana("Castle, Unreal Engine, octane render");
        assert_eq!(codes(&issues), vec!["NANO_BANANA_TECHNICAL"]);
        assert!(issues[0].message.contains("octane render"));
        assert_eq!(
            codes(&nano_banana("A beach with no people")),
            vec!["NANO_BANANA_NEGATIVE"]
        );
    }

    #[test]
    fn grok_visual_checks() {
        let prompt = format!("{} hands holding a sign with text", "a".repeat(700));
        let issues = grok_visual(&prompt);
        assert_eq!(
            codes(&issues),
            vec!["GROK_IMAGE_TOO_LONG", "GROK_IMAGE_HANDS", "GROK_IMAGE_TEXT"]
        );
        assert!(grok_visual("A quiet lake at dawn").is_empty());
    }

    #[test]
    fn length_only_threshold() {
        assert!(length_only(&"a".repeat(1000)).is_empty());
        assert_eq!(codes(&length_only(&"a".repeat(1001))), vec!["GROK_ITERATE"]);
    }
}
