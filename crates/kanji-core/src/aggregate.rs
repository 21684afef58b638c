use std::collections::HashMap;

use kanji_types::{StatsBar, StatsSummary};

use crate::catalog::{Catalog, CategoryDescriptor, KanjiRecord};

/// Number of records in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub id: String,
    pub label: String,
    pub label_native: String,
    pub count: usize,
}

/// Per-category record counts, largest first.
///
/// The "all" sentinel is skipped. Empty categories are kept with a count
/// of zero. Equal counts keep the order of `categories`.
pub fn aggregate(records: &[KanjiRecord], categories: &[CategoryDescriptor]) -> Vec<CategoryCount> {
    let mut per_category: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *per_category.entry(record.category_id.as_str()).or_default() += 1;
    }

    let mut counts: Vec<CategoryCount> = categories
        .iter()
        .filter(|category| !category.is_sentinel())
        .map(|category| CategoryCount {
            id: category.id.clone(),
            label: category.display_name.clone(),
            label_native: category.display_name_native.clone(),
            count: per_category.get(category.id.as_str()).copied().unwrap_or(0),
        })
        .collect();

    // `sort_by` is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Figures for the statistics view
pub fn summarize(catalog: &Catalog) -> StatsSummary {
    let bars: Vec<StatsBar> = aggregate(catalog.records(), catalog.categories())
        .into_iter()
        .map(|c| StatsBar {
            label: c.label,
            label_native: c.label_native,
            count: c.count,
        })
        .collect();

    StatsSummary {
        total: catalog.len(),
        level: catalog.level().to_string(),
        category_count: bars.len(),
        bars,
    }
}
