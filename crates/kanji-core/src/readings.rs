/// Separator between alternate readings in the onyomi/kunyomi fields
pub const READING_SEPARATOR: char = '、';

/// Every non-empty alternate reading, in order
pub fn split_readings(readings: &str) -> impl Iterator<Item = &str> {
    readings
        .split(READING_SEPARATOR)
        .map(str::trim)
        .filter(|r| !r.is_empty())
}

/// First reading, shown on study cards.
///
/// Only the leading segment counts: a field starting with the separator has
/// no primary reading even if later segments are filled.
pub fn primary_reading(readings: &str) -> Option<&str> {
    readings
        .split(READING_SEPARATOR)
        .next()
        .map(str::trim)
        .filter(|r| !r.is_empty())
}

/// Reading field as shown in the detail view, `-` when empty
pub fn display_readings(readings: &str) -> String {
    if readings.trim().is_empty() {
        "-".to_string()
    } else {
        readings.to_string()
    }
}
