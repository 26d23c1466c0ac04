//! Text utilities for building answer content and query terms.

use regex::Regex;
use std::sync::LazyLock;

/// Punctuation, combining marks and symbols (Unicode categories P, M, S).
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{M}\p{S}]").expect("separator pattern is valid"));

/// Map a punctuation, mark or symbol code point to a space.
///
/// Letters, digits and whitespace are returned unchanged.
pub fn sanitize(c: char) -> char {
    let mut buf = [0u8; 4];
    if SEPARATORS.is_match(c.encode_utf8(&mut buf)) {
        ' '
    } else {
        c
    }
}

/// Replace every punctuation, mark and symbol code point in `text` with a space.
pub fn normalize(text: &str) -> String {
    SEPARATORS.replace_all(text, " ").into_owned()
}

/// Split free text into lower-cased query terms.
pub fn query_terms(text: &str) -> Vec<String> {
    normalize(&text.to_lowercase())
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Truncate `s` so that it fits in `limit` bytes, marking the cut with `...`.
///
/// Strings of at most `limit - 3` bytes are returned unchanged. Longer ones
/// keep their first `limit - 3` bytes, moved back to the nearest character
/// boundary so the result stays valid UTF-8. The result never exceeds
/// `limit` bytes; below 3 only part of the marker fits.
pub fn truncate(s: &str, limit: usize) -> String {
    const MARKER: &str = "...";

    let target = limit.saturating_sub(MARKER.len());
    if s.len() <= target {
        return s.to_string();
    }
    if limit < MARKER.len() {
        return MARKER[..limit].to_string();
    }
    let mut end = target;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &s[..end], MARKER)
}
