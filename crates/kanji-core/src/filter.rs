use crate::catalog::{ALL_CATEGORY, KanjiRecord, RecordId};

/// Category clause: the sentinel matches every record
pub fn matches_category(record: &KanjiRecord, category_id: &str) -> bool {
    category_id == ALL_CATEGORY || record.category_id == category_id
}

/// Search clause. Empty search matches everything.
///
/// The Bengali meaning is compared as-is. Every other field is compared
/// after lowercasing both sides.
pub fn matches_search(record: &KanjiRecord, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }

    let needle = search_text.to_lowercase();
    let folded = |field: &str| field.to_lowercase().contains(&needle);

    folded(&record.character)
        || folded(&record.meaning_english)
        || record.meaning_local.contains(search_text)
        || folded(&record.onyomi)
        || folded(&record.kunyomi)
}

pub fn matches(record: &KanjiRecord, search_text: &str, category_id: &str) -> bool {
    matches_category(record, category_id) && matches_search(record, search_text)
}

/// Records passing both clauses, in catalog order
pub fn filter<'a>(
    records: &'a [KanjiRecord],
    search_text: &str,
    category_id: &str,
) -> Vec<&'a KanjiRecord> {
    records
        .iter()
        .filter(|record| matches(record, search_text, category_id))
        .collect()
}

/// Same as [`filter`], returning positions instead of references
pub fn filter_ids(records: &[KanjiRecord], search_text: &str, category_id: &str) -> Vec<RecordId> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, search_text, category_id))
        .map(|(index, _)| RecordId(index))
        .collect()
}
