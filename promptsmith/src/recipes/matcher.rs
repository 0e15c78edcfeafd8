//! Keyword scoring of free text against the recipe catalog.
//!
//! Each matched keyword contributes `chars / 10`; the sum is normalised by the recipe's own
//! maximum, a multi-match bonus of `min(matched * 0.1, 0.3)` is added, and the total is clamped
//! to 1.0.

use serde::Serialize;

use super::catalog::RECIPES;
use super::Recipe;

/// Default minimum confidence for [`find_all`].
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Inputs with fewer non-whitespace characters never match.
const MIN_INPUT_CHARS: usize = 3;

const BONUS_PER_MATCH: f64 = 0.1;
const MAX_BONUS: f64 = 0.3;

/// How well a text matches one recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    pub recipe: &'static Recipe,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub matched_keywords: Vec<&'static str>,
}

fn keyword_weight(keyword: &str) -> f64 {
    keyword.chars().count() as f64 / 10.0
}

/// Scores `text` against `recipe`. Always returns a match, possibly with zero confidence.
pub fn score(text: &str, recipe: &'static Recipe) -> RecipeMatch {
    let input = text.trim().to_lowercase();
    let matched_keywords: Vec<&'static str> = recipe
        .keywords
        .iter()
        .copied()
        .filter(|k| input.contains(&k.to_lowercase()))
        .collect();

    let raw: f64 = matched_keywords.iter().map(|k| keyword_weight(k)).sum();
    let max: f64 = recipe.keywords.iter().map(|k| keyword_weight(k)).sum();
    let normalised = if max > 0.0 { raw / max } else { 0.0 };
    let bonus = (matched_keywords.len() as f64 * BONUS_PER_MATCH).min(MAX_BONUS);

    RecipeMatch {
        recipe,
        confidence: (normalised + bonus).min(1.0),
        matched_keywords,
    }
}

fn too_short(text: &str) -> bool {
    text.chars().filter(|c| !c.is_whitespace()).count() < MIN_INPUT_CHARS
}

fn scored(text: &str) -> impl Iterator<Item = RecipeMatch> + '_ {
    RECIPES
        .iter()
        .map(move |recipe| score(text, recipe))
        .filter(|m| !m.matched_keywords.is_empty())
}

/// Highest-scoring recipe above 0.1, or `None` for short or unmatched input.
/// Ties go to the recipe listed first.
pub fn match_best(text: &str) -> Option<RecipeMatch> {
    if too_short(text) {
        return None;
    }
    let best = scored(text)
        .filter(|m| m.confidence > DEFAULT_THRESHOLD)
        .fold(None::<RecipeMatch>, |best, m| match best {
            Some(b) if b.confidence >= m.confidence => Some(b),
            _ => Some(m),
        });
    tracing::debug!(recipe = best.as_ref().map(|m| m.recipe.slug), "matched recipe");
    best
}

/// All recipes scoring at least `threshold`, by descending confidence. Ties keep catalog order.
pub fn find_all(text: &str, threshold: f64) -> Vec<RecipeMatch> {
    if too_short(text) {
        return Vec::new();
    }
    let mut matches: Vec<RecipeMatch> = scored(text).filter(|m| m.confidence >= threshold).collect();
    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::recipe_by_slug;

    #[test]
    fn review_request_matches_code_review() {
        let m = match_best("Please review this code for bugs").unwrap();
        assert_eq!(m.recipe.slug, "code-review");
        assert!(m.confidence > 0.1);
        assert_eq!(m.matched_keywords, vec!["review", "bug"]);
    }

    #[test]
    fn score_formula() {
        let recipe = recipe_by_slug("video-generation").unwrap();
        // keywords total 36 chars -> max 3.6; "video" (0.5) + "clip" (0.4) = 0.9
        let m = score("A video clip of rain", recipe);
        assert_eq!(m.matched_keywords, vec!["video", "clip"]);
        let expected = 0.9 / 3.6 + 0.2;
        assert!((m.confidence - expected).abs() < 1e-9, "{}", m.confidence);
    }

    #[test]
    fn confidence_is_clamped() {
        let recipe = recipe_by_slug("video-generation").unwrap();
        let text = recipe.keywords.join(" ");
        assert_eq!(score(&text, recipe).confidence, 1.0);
    }

    #[test]
    fn short_input_never_matches() {
        assert!(match_best("").is_none());
        assert!(match_best(" a b ").is_none());
        assert!(find_all("", DEFAULT_THRESHOLD).is_empty());
        assert!(find_all("ab", DEFAULT_THRESHOLD).is_empty());
        assert!(find_all("ab", 0.0).is_empty());
    }

    #[test]
    fn find_all_is_sorted_descending() {
        let matches = find_all("translate this summary and fix the bug", DEFAULT_THRESHOLD);
        assert!(matches.len() >= 2);
        for pair in matches.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
        assert!(matches.iter().all(|m| !m.matched_keywords.is_empty()));
    }

    #[test]
    fn unmatched_language_yields_nothing() {
        assert!(match_best("Erkläre mir die Quantenphysik").is_none());
    }

    #[test]
    fn catalog_keywords_decide_matches() {
        assert!(match_best("Is it true that coffee helps? Please verify").is_none());
        let m = match_best("Czy to prawda, ze kawa pomaga?").unwrap();
        assert_eq!(m.recipe.slug, "fact-check");
        assert_eq!(m.matched_keywords, vec!["czy to prawda"]);
    }

    #[test]
    fn threshold_filters() {
        assert!(find_all("Please review this code for bugs", 0.99).is_empty());
    }
}
