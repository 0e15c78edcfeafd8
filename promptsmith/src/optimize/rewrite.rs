//! Per-model rewriters. Each applies an ordered list of transformations and records a change only
//! when the transformation altered the text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Change, ChangeKind, Rewrite};

/// Signature shared by all rewriters.
pub type RewriteFn = fn(&str) -> Rewrite;

const CLAUDE_WRAP_THRESHOLD: usize = 200;
const GPT_WRAP_THRESHOLD: usize = 300;
const GPT_WRAP_MIN_LINES: usize = 4;

/// Longer phrases first so "think about" is not consumed by "think".
static THINK_REPLACEMENTS: Lazy<Vec<(Regex, &'static str, &'static str)>> = Lazy::new(|| {
    [
        ("think about", "consider"),
        ("think through", "work through"),
        ("thinking", "evaluating"),
        ("think", "assess"),
    ]
    .into_iter()
    .map(|(from, to)| {
        let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from))).expect("valid regex");
        (re, from, to)
    })
    .collect()
});

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<\w+>").expect("valid regex"));

const VERBOSE_PHRASES: &[&str] = &[
    "Prosze, ",
    "Czy moglbys ",
    "Bylbym wdzieczny gdybys ",
    "Pamietaj, ze ",
    "Nalezy pamietac, ze ",
];

static FORMAT_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)format:").expect("valid regex"));

static ROLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bJestes\s+\w+[\w\s]*\.\s*",
        r"(?i)\bYou are\s+\w+[\w\s]*\.\s*",
        r"(?i)\bAs a\s+\w+[\w\s]*,\s*",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

static EXAMPLE_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?i)przyk[lł]ad:", r"(?i)example:"]
        .into_iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
});

/// Models without a dedicated rewriter keep the prompt as is.
pub(crate) fn identity(prompt: &str) -> Rewrite {
    Rewrite::unchanged(prompt)
}

pub(crate) fn claude(prompt: &str) -> Rewrite {
    let mut text = prompt.to_string();
    let mut changes = Vec::new();

    for (re, from, to) in THINK_REPLACEMENTS.iter() {
        if re.is_match(&text) {
            text = re.replace_all(&text, *to).into_owned();
            changes.push(Change::new(
                ChangeKind::Modified,
                format!("Replaced \"{from}\" with \"{to}\""),
                "Claude 4.5 is sensitive to the word \"think\" without extended thinking",
            ));
        }
    }

    let lower = text.to_lowercase();
    let mentions_context = lower.contains("kontekst") || lower.contains("context");
    if !ANY_TAG.is_match(&text)
        && text.chars().count() > CLAUDE_WRAP_THRESHOLD
        && !mentions_context
    {
        text = format!("<task>\n{text}\n</task>");
        changes.push(Change::new(
            ChangeKind::Added,
            "Added XML structure (<task>)",
            "Claude 4.5 responds better to prompts with XML structure",
        ));
    }

    Rewrite { text, changes }
}

pub(crate) fn gpt(prompt: &str) -> Rewrite {
    if prompt.chars().count() > GPT_WRAP_THRESHOLD
        && !prompt.contains("##")
        && prompt.split('\n').count() >= GPT_WRAP_MIN_LINES
    {
        return Rewrite {
            text: format!("## Task\n{prompt}\n\n## Response format\n[Specify the expected format]"),
            changes: vec![Change::new(
                ChangeKind::Added,
                "Added Markdown structure",
                "GPT-5.2 handles structured prompts better",
            )],
        };
    }
    Rewrite::unchanged(prompt)
}

pub(crate) fn gemini(prompt: &str) -> Rewrite {
    let mut text = prompt.to_string();
    let mut changes = Vec::new();

    for phrase in VERBOSE_PHRASES {
        if text.contains(phrase) {
            text = text.replacen(phrase, "", 1);
            changes.push(Change::new(
                ChangeKind::Removed,
                format!("Removed \"{phrase}\""),
                "Gemini 3 needs shorter prompts (30-50% less)",
            ));
        }
    }

    if let Some(moved) = move_format_last(&text) {
        text = moved;
        changes.push(Change::new(
            ChangeKind::Modified,
            "Moved the format instructions to the end",
            "Gemini 3 gives more weight to instructions at the end",
        ));
    }

    Rewrite { text, changes }
}

/// Moves the first `Format:` block (up to the next blank line) to the end of the prompt.
/// Returns `None` when there is no such block or nothing follows it.
fn move_format_last(text: &str) -> Option<String> {
    let start = FORMAT_LABEL.find(text)?.start();
    let end = text[start..]
        .find("\n\n")
        .map_or(text.len(), |offset| start + offset);

    let block = &text[start..end];
    let before = text[..start].trim_end();
    let after = text[end..].trim();
    if after.is_empty() {
        return None;
    }

    let rest = if before.is_empty() {
        after.to_string()
    } else {
        format!("{before}\n\n{after}")
    };
    Some(format!("{rest}\n\n{block}"))
}

pub(crate) fn perplexity(prompt: &str) -> Rewrite {
    let mut text = prompt.to_string();
    let mut changes = Vec::new();

    for re in ROLE_PATTERNS.iter() {
        if re.is_match(&text) {
            text = re.replace_all(&text, "").into_owned();
            changes.push(Change::new(
                ChangeKind::Removed,
                "Removed role-playing",
                "Perplexity is a search engine; role-playing does not work",
            ));
        }
    }

    for marker in EXAMPLE_MARKERS.iter() {
        if let Some(stripped) = strip_blocks(&text, marker) {
            text = stripped.trim_end().to_string();
            changes.push(Change::new(
                ChangeKind::Removed,
                "Removed few-shot examples",
                "Few-shot examples confuse Perplexity; it searches for them instead of answering",
            ));
        }
    }

    Rewrite { text, changes }
}

/// Removes every block that starts at `marker` and runs to the next blank line or the end,
/// together with that blank line.
fn strip_blocks(text: &str, marker: &Regex) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut removed = false;
    while let Some(m) = marker.find(rest) {
        out.push_str(&rest[..m.start()]);
        let tail = &rest[m.start()..];
        let end = tail.find("\n\n").unwrap_or(tail.len());
        let after = &tail[end..];
        rest = after.strip_prefix("\n\n").unwrap_or(after);
        removed = true;
    }
    out.push_str(rest);
    removed.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claude_replaces_think_variants_in_order() {
        let out = claude("Think about this problem and solve it");
        assert_eq!(out.text, "consider this problem and solve it");
        assert_eq!(out.changes.len(), 1);
        assert_eq!(out.changes[0].kind, ChangeKind::Modified);

        let out = claude("I think thinking helps; think through it");
        assert_eq!(out.text, "I assess evaluating helps; work through it");
        assert_eq!(out.changes.len(), 3);
    }

    #[test]
    fn claude_leaves_embedded_think_alone() {
        let out = claude("Rethink the plan");
        assert_eq!(out.text, "Rethink the plan");
        assert!(out.changes.is_empty());
    }

    #[test]
    fn claude_wraps_long_untagged_prompt() {
        let prompt = "Summarise the quarterly report. ".repeat(8);
        let out = claude(&prompt);
        assert!(out.text.starts_with("<task>\n"));
        assert!(out.text.ends_with("\n</task>"));
        assert_eq!(out.changes[0].kind, ChangeKind::Added);
    }

    #[test]
    fn claude_does_not_wrap_when_context_is_mentioned() {
        let prompt = format!("Context: {}", "details ".repeat(40));
        assert_eq!(claude(&prompt).text, prompt);
    }

    #[test]
    fn gpt_wraps_long_multiline_prompt() {
        let prompt = vec!["line of text ".repeat(7); 4].join("\n");
        let out = gpt(&prompt);
        assert!(out.text.starts_with("## Task\n"));
        assert!(out.text.ends_with("[Specify the expected format]"));
        assert_eq!(out.changes.len(), 1);
    }

    #[test]
    fn gpt_keeps_short_or_single_line_prompt() {
        assert!(gpt("short").changes.is_empty());
        assert!(gpt(&"x".repeat(400)).changes.is_empty());
    }

    #[test]
    fn gemini_removes_verbose_phrases_once() {
        let out = gemini("Prosze, wypisz kolory. Prosze, krotko.\nFormat: lista");
        assert_eq!(out.text, "wypisz kolory. Prosze, krotko.\nFormat: lista");
        assert_eq!(out.changes.len(), 1);
    }

    #[test]
    fn gemini_keeps_english_courtesy_phrases() {
        let out = gemini("Could you list colours.\nOutput: list");
        assert_eq!(out.text, "Could you list colours.\nOutput: list");
        assert!(out.changes.is_empty());
    }

    #[test]
    fn gemini_moves_format_block_to_end() {
        let out = gemini("Goal: sort\nFormat: JSON array\n\nConstraints: stable");
        assert_eq!(out.text, "Goal: sort\n\nConstraints: stable\n\nFormat: JSON array");
        assert_eq!(out.changes.len(), 1);
        // already last
        assert!(gemini(&out.text).changes.is_empty());
    }

    #[test]
    fn gemini_format_already_last_with_trailing_blank_line() {
        assert!(gemini("Goal: sort\n\nFormat: JSON\n\n").changes.is_empty());
    }

    #[test]
    fn perplexity_strips_role_and_examples() {
        let out = perplexity(
            "You are an expert in EU law. What changed in the AI Act in 2025?\n\nExample: GDPR fines",
        );
        assert_eq!(out.text, "What changed in the AI Act in 2025?");
        assert_eq!(out.changes.len(), 2);
    }

    #[test]
    fn perplexity_strips_polish_examples_with_diacritic() {
        let out = perplexity("Jakie są nowe przepisy?\n\nPrzykład: RODO\n\nSkup się na UE");
        assert_eq!(out.text, "Jakie są nowe przepisy?\n\nSkup się na UE");
        assert_eq!(out.changes.len(), 1);
    }

    #[test]
    fn perplexity_role_pattern_needs_word_boundary() {
        let prompt = "What has a bigger impact, rates or inflation?";
        assert_eq!(perplexity(prompt).text, prompt);
    }

    #[test]
    fn identity_records_nothing() {
        let out = identity("anything");
        assert_eq!(out.text, "anything");
        assert!(out.changes.is_empty());
    }
}
