//! Parsed document model.

use serde::{Deserialize, Serialize};

/// Title used when a document has no level-1 heading.
pub const UNTITLED: &str = "Untitled";

/// One heading and the body text up to the next heading.
///
/// Sections are flat: nesting is expressed only through `level`, never through ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Heading depth, 1 to 6.
    pub level: u8,
    /// Trimmed body between this heading and the next one.
    pub content: String,
    /// 1-based line number of the heading in the source.
    pub line: usize,
}

/// Canonical summary block of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TldrBlock {
    pub rules: Vec<String>,
    pub avoid: Vec<String>,
    pub quick_start: String,
}

/// Structured view of a knowledge document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub title: String,
    pub tldr: Option<TldrBlock>,
    pub sections: Vec<Section>,
    pub checklist: Vec<String>,
    pub raw: String,
}

impl ParsedDocument {
    /// First section whose title contains `name`, case-insensitively. Later duplicates are ignored.
    pub fn section(&self, name: &str) -> Option<&Section> {
        find_section(&self.sections, name)
    }

    /// All level-2 sections in document order.
    pub fn main_sections(&self) -> Vec<&Section> {
        self.sections.iter().filter(|s| s.level == 2).collect()
    }
}

pub(crate) fn find_section<'a>(sections: &'a [Section], name: &str) -> Option<&'a Section> {
    position_of(sections, name).map(|i| &sections[i])
}

pub(crate) fn position_of(sections: &[Section], name: &str) -> Option<usize> {
    let needle = name.to_lowercase();
    sections
        .iter()
        .position(|s| s.title.to_lowercase().contains(&needle))
}

/// Sections nested under `sections[index]`: every following section deeper than it, up to the
/// next heading at the same or a higher level.
pub(crate) fn nested_under(sections: &[Section], index: usize) -> &[Section] {
    let level = sections[index].level;
    let start = index + 1;
    let end = sections[start..]
        .iter()
        .position(|s| s.level <= level)
        .map(|offset| start + offset)
        .unwrap_or(sections.len());
    &sections[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, level: u8) -> Section {
        Section {
            title: title.to_string(),
            level,
            content: String::new(),
            line: 0,
        }
    }

    #[test]
    fn find_section_returns_first_match() {
        let sections = vec![
            section("Tips for images", 2),
            section("More tips", 2),
        ];
        let found = find_section(&sections, "TIP").unwrap();
        assert_eq!(found.title, "Tips for images");
    }

    #[test]
    fn nested_under_stops_at_same_level() {
        let sections = vec![
            section("TL;DR", 2),
            section("RULES", 3),
            section("AVOID", 3),
            section("Detail", 4),
            section("Next", 2),
            section("Other", 3),
        ];
        let nested = nested_under(&sections, 0);
        let titles: Vec<_> = nested.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["RULES", "AVOID", "Detail"]);
    }

    #[test]
    fn nested_under_last_section_is_empty() {
        let sections = vec![section("Only", 2)];
        assert!(nested_under(&sections, 0).is_empty());
    }
}
