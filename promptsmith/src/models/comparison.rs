//! Cross-model quick reference table.

use std::collections::BTreeMap;

use super::ModelSlug;

/// attribute -> model slug -> short description.
pub type ComparisonTable = BTreeMap<&'static str, BTreeMap<ModelSlug, &'static str>>;

const ROWS: &[(&str, [&str; 8])] = &[
    (
        "literalness",
        ["Very high", "High", "Medium", "High", "N/A", "N/A", "N/A", "High"],
    ),
    (
        "structure",
        [
            "XML tags",
            "Markdown",
            "Markdown/XML",
            "Role+Goal+Constraints",
            "Natural description",
            "Subject-first",
            "Subject+Motion",
            "Search query",
        ],
    ),
    (
        "temperature",
        [
            "Default",
            "Default",
            "Default",
            "1.0 (DO NOT CHANGE!)",
            "N/A",
            "N/A",
            "N/A",
            "N/A",
        ],
    ),
];

/// Static comparison of the registered models. No I/O, no caching.
pub fn comparison_table() -> ComparisonTable {
    ROWS.iter()
        .map(|(attribute, values)| {
            let row = ModelSlug::ALL.into_iter().zip(values.iter().copied()).collect();
            (*attribute, row)
        })
        .collect()
}
