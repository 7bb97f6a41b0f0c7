//! Canonical text form used for every comparison.

use serde_json::Value;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Lower-case, strip accents, collapse whitespace and drop trailing punctuation.
///
/// `"  ¡Actualízalo YA!! "` becomes `"¡actualizalo ya"`. Punctuation inside
/// the text is kept. The result is a fixed point: normalizing it again
/// returns the same string.
pub fn normalize(input: &str) -> String {
    // Marks are filtered again after lower-casing: `İ` lowers to `i` + U+0307.
    let folded: String = input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed
        .trim_end_matches(|c: char| c == ' ' || TRAILING_PUNCTUATION.contains(&c))
        .to_string()
}

/// Normalize a JSON value. Anything that is not a string yields `""`.
pub fn normalize_value(value: &Value) -> String {
    value.as_str().map(normalize).unwrap_or_default()
}
