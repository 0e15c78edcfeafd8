//! Inline markdown helpers: list items, markup stripping, fenced code blocks.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.|[-*+])\s+(.+)$").expect("valid regex"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("valid regex"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid regex"));
static CHECKBOX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\[[ x]\]\s*").expect("valid regex"));

/// Plain text of every bullet or numbered list item in `content`, in order.
pub(crate) fn list_items(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let caps = LIST_ITEM.captures(line.trim())?;
            let text = strip_inline(&caps[1]);
            (!text.is_empty()).then_some(text)
        })
        .collect()
}

/// Removes bold, italic, inline-code and link markup, leaving the visible text.
pub(crate) fn strip_inline(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    text.trim().to_string()
}

/// Drops a leading `[ ]` / `[x]` checkbox.
pub(crate) fn strip_checkbox(item: &str) -> String {
    CHECKBOX.replace(item, "").into_owned()
}

/// Inner text of the first fenced code block, trimmed. Empty when there is none.
pub(crate) fn first_code_block(content: &str) -> String {
    let mut inside = false;
    let mut body: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            if inside {
                return body.join("\n").trim().to_string();
            }
            inside = true;
            continue;
        }
        if inside {
            body.push(line);
        }
    }
    String::new()
}

/// True when `line` opens or closes a fenced code block.
pub(crate) fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with("```")
}
