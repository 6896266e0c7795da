//! Accent- and case-insensitive text folding.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Fold `text` for accent-insensitive comparison.
///
/// Decomposes to NFD, drops combining diacritical marks, maps `Đ`/`đ` to
/// `D`/`d` (the stroke is not a combining mark) and lowercases.
/// `normalize(normalize(s)) == normalize(s)` for every `s`.
///
/// ```
/// use brandstore_storefront::normalize;
///
/// assert_eq!(normalize("Áo khoác"), "ao khoac");
/// assert_eq!(normalize("Đen"), "den");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| match c {
            'Đ' => 'D',
            'đ' => 'd',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}
