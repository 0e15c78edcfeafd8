//! Markdown document parser: sections, TL;DR block and checklist.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::{find_section, nested_under, position_of, Section, TldrBlock, UNTITLED};
use super::markdown::{first_code_block, is_fence, list_items, strip_checkbox};
use super::{ParseError, ParsedDocument};

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid regex"));

/// Sub-block titles inside the TL;DR section (English and Polish).
const RULES_TITLES: &[&str] = &["RULES", "REGUŁY", "REGULY"];
const AVOID_TITLES: &[&str] = &["AVOID", "UNIKAJ"];
const QUICK_START_TITLES: &[&str] = &["QUICK START", "SZYBKI START"];

/// Reads `path` as UTF-8 and parses it.
///
/// Fails with [`ParseError::FileNotFound`] when the file does not exist and with
/// [`ParseError::Read`] on any other I/O failure (including invalid UTF-8).
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedDocument, ParseError> {
    let path = path.as_ref();
    let source =
        std::fs::read_to_string(path).map_err(|e| ParseError::from_io(path.to_path_buf(), e))?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read knowledge document");
    Ok(parse_text(&source))
}

/// Parses markdown `source` into a [`ParsedDocument`]. Never fails.
pub fn parse_text(source: &str) -> ParsedDocument {
    let sections = split_sections(source);

    let title = sections
        .iter()
        .find(|s| s.level == 1)
        .map(|s| s.title.clone())
        .unwrap_or_else(|| UNTITLED.to_string());

    let tldr = position_of(&sections, "TL;DR").map(|i| tldr_block(&sections, i));

    let checklist = find_section(&sections, "checklist")
        .map(|s| {
            list_items(&s.content)
                .iter()
                .map(|item| strip_checkbox(item))
                .collect()
        })
        .unwrap_or_default();

    ParsedDocument {
        title,
        tldr,
        sections,
        checklist,
        raw: source.to_string(),
    }
}

/// Splits `source` at heading lines. Text before the first heading belongs to no section.
fn split_sections(source: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;
    let mut body: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for (idx, line) in source.lines().enumerate() {
        if is_fence(line) {
            in_fence = !in_fence;
        } else if !in_fence {
            if let Some(caps) = HEADING.captures(line) {
                flush(&mut sections, current.take(), &mut body);
                current = Some(Section {
                    title: caps[2].trim().to_string(),
                    level: caps[1].len() as u8,
                    content: String::new(),
                    line: idx + 1,
                });
                continue;
            }
        }
        body.push(line);
    }
    flush(&mut sections, current, &mut body);
    sections
}

fn flush(sections: &mut Vec<Section>, current: Option<Section>, body: &mut Vec<&str>) {
    if let Some(mut section) = current {
        section.content = body.join("\n").trim().to_string();
        sections.push(section);
    }
    body.clear();
}

fn tldr_block(sections: &[Section], index: usize) -> TldrBlock {
    let nested = nested_under(sections, index);
    let block = |titles: &[&str]| {
        nested.iter().find(|s| {
            let upper = s.title.to_uppercase();
            titles.iter().any(|t| upper.contains(t))
        })
    };

    TldrBlock {
        rules: block(RULES_TITLES)
            .map(|s| list_items(&s.content))
            .unwrap_or_default(),
        avoid: block(AVOID_TITLES)
            .map(|s| list_items(&s.content))
            .unwrap_or_default(),
        quick_start: block(QUICK_START_TITLES)
            .map(|s| first_code_block(&s.content))
            .unwrap_or_default(),
    }
}
