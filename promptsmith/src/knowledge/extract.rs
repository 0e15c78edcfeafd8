//! Rule extraction from a parsed document.

use serde::{Deserialize, Serialize};

use super::markdown::list_items;
use super::ParsedDocument;

/// Number of "general rules" bullets promoted to tips.
const GENERAL_TIPS_LIMIT: usize = 5;

/// Titles searched, in order, for the general-rules section (Polish first, then English).
const GENERAL_TITLES: &[&str] = &["zasady ogolne", "zasady og", "general"];

/// Rules derived from one knowledge document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRules {
    pub rules: Vec<String>,
    pub avoid: Vec<String>,
    pub checklist: Vec<String>,
    pub tips: Vec<String>,
    pub quick_start: String,
}

/// Folds a parsed document into [`ExtractedRules`].
///
/// Rules, avoid-list and quick start come from the TL;DR block; the checklist is copied as is.
/// Tips are every item of the first section titled like "tip", followed by the first five items
/// of the general-rules section. Missing sections yield empty collections.
pub fn extract_rules(doc: &ParsedDocument) -> ExtractedRules {
    let tldr = doc.tldr.clone().unwrap_or_default();

    let mut tips = doc
        .section("tip")
        .map(|s| list_items(&s.content))
        .unwrap_or_default();

    if let Some(general) = GENERAL_TITLES.iter().find_map(|t| doc.section(t)) {
        tips.extend(
            list_items(&general.content)
                .into_iter()
                .take(GENERAL_TIPS_LIMIT),
        );
    }

    ExtractedRules {
        rules: tldr.rules,
        avoid: tldr.avoid,
        checklist: doc.checklist.clone(),
        tips,
        quick_start: tldr.quick_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::parse_text;

    #[test]
    fn collects_tips_then_general_rules() {
        let src = "\
# Doc
## Pro tips
- tip one
- tip two
## General rules
- g1
- g2
- g3
- g4
- g5
- g6
";
        let rules = extract_rules(&parse_text(src));
        assert_eq!(
            rules.tips,
            vec!["tip one", "tip two", "g1", "g2", "g3", "g4", "g5"]
        );
    }

    #[test]
    fn polish_general_section_wins_over_english() {
        let src = "# D\n## General notes\n- english\n## Zasady ogolne\n- polish\n";
        let rules = extract_rules(&parse_text(src));
        assert_eq!(rules.tips, vec!["polish"]);
    }

    #[test]
    fn empty_document_yields_empty_rules() {
        let rules = extract_rules(&parse_text(""));
        assert_eq!(rules, ExtractedRules::default());
    }

    #[test]
    fn tldr_and_checklist_are_carried_over() {
        let src = "## TL;DR\n### RULES\n- r\n### AVOID\n- a\n### QUICK START\n```\nq\n```\n## Checklist\n- [ ] c\n";
        let rules = extract_rules(&parse_text(src));
        assert_eq!(rules.rules, vec!["r"]);
        assert_eq!(rules.avoid, vec!["a"]);
        assert_eq!(rules.quick_start, "q");
        assert_eq!(rules.checklist, vec!["c"]);
    }
}
