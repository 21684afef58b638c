use unicode_normalization::UnicodeNormalization;

/// Canonical form of a kanji glyph string.
///
/// NFC maps CJK compatibility ideographs (U+F900..) onto their unified
/// code points, so the same character typed from different sources
/// compares equal.
pub fn normalize_glyph(text: &str) -> String {
    text.trim().nfc().collect()
}
