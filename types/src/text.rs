//! Grapheme-aware prefix helpers.
//!
//! Role labels are revealed one user-perceived character at a time, so a
//! combining accent or emoji sequence never shows up half-typed.

use unicode_segmentation::UnicodeSegmentation;

/// Number of extended grapheme clusters in `text`.
#[must_use]
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// The first `count` grapheme clusters of `text`.
///
/// Returns the whole string when `count` exceeds its length.
#[must_use]
pub fn grapheme_prefix(text: &str, count: usize) -> &str {
    match text.grapheme_indices(true).nth(count) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
