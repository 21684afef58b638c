use std::path::Path;

use kanji_core::{ALL_CATEGORY, Catalog, CatalogError, CategoryDescriptor, KanjiRecord};
use serde::Deserialize;

use crate::jlpt::JlptLevel;

/// On-disk dataset layout
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    level: String,
    #[serde(default)]
    categories: Vec<CategoryDescriptor>,
    #[serde(default)]
    kanji: Vec<KanjiRecord>,
}

pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse and validate a dataset document
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;

        let level = match JlptLevel::parse(&doc.level) {
            Some(level) => level.as_str().to_string(),
            None => {
                tracing::warn!("Unknown JLPT level '{}', keeping it as-is", doc.level);
                doc.level
            }
        };

        Catalog::new(level, doc.categories, doc.kanji)
    }

    /// Load the bundled N5 dataset
    pub fn load_embedded() -> Result<Catalog, CatalogError> {
        let json = include_str!("../data/n5_kanji.json");
        tracing::info!("Loading embedded kanji catalog...");
        let catalog = Self::from_json(json)?;
        tracing::info!(
            "Loaded {} kanji in {} categories",
            catalog.len(),
            catalog.real_categories().count()
        );
        Ok(catalog)
    }

    /// Load a dataset from file path
    pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogError> {
        tracing::info!("Loading kanji catalog from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} kanji from file", catalog.len());
        Ok(catalog)
    }

    /// Overlay `additional` on `base`.
    ///
    /// Records with a glyph already in `base` replace it in place, new glyphs
    /// are appended. Categories merge the same way by id. The level of `base`
    /// is kept.
    pub fn merge(base: Catalog, additional: Catalog) -> Result<Catalog, CatalogError> {
        let (level, mut categories, mut records) = base.into_parts();
        let (_, extra_categories, extra_records) = additional.into_parts();

        for category in extra_categories {
            match categories.iter_mut().find(|c| c.id == category.id) {
                Some(existing) => *existing = category,
                None => categories.push(category),
            }
        }

        for record in extra_records {
            match records.iter_mut().find(|r| r.character == record.character) {
                Some(existing) => *existing = record,
                None => records.push(record),
            }
        }

        Catalog::new(level, categories, records)
    }

    /// Build the session catalog: optionally the bundled dataset, then every
    /// additional file in order.
    pub fn load(use_embedded: bool, additional_paths: &[String]) -> Result<Catalog, CatalogError> {
        let mut catalog = if use_embedded {
            Self::load_embedded()?
        } else {
            tracing::warn!("Embedded catalog disabled");
            Self::empty()?
        };

        for path in additional_paths {
            let extra = Self::load_from_file(Path::new(path))?;
            catalog = Self::merge(catalog, extra)?;
        }

        Ok(catalog)
    }

    fn empty() -> Result<Catalog, CatalogError> {
        let all = CategoryDescriptor {
            id: ALL_CATEGORY.to_string(),
            display_name: "All (সব)".to_string(),
            display_name_native: "すべて".to_string(),
        };
        Catalog::new(JlptLevel::N5.as_str(), vec![all], vec![])
    }
}
