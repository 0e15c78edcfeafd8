//! Token estimation: one token per four characters, rounded up.

/// Characters per estimated token.
const CHARS_PER_TOKEN: usize = 4;

/// Approximate language-model token count of `text`: `ceil(chars / 4)`.
///
/// Counts Unicode scalar values, not bytes, so non-ASCII text is not over-counted.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

/// Signed difference `estimate_tokens(after) - estimate_tokens(before)`.
pub fn token_delta(before: &str, after: &str) -> i64 {
    estimate_tokens(after) as i64 - estimate_tokens(before) as i64
}
