use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::preprocess::normalize_glyph;

/// Category id meaning "no filter". Never labels a real record.
pub const ALL_CATEGORY: &str = "all";

/// One kanji entry. Field names on disk follow the bundled dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiRecord {
    #[serde(rename = "kanji")]
    pub character: String,
    /// Full-width comma separated readings
    #[serde(default)]
    pub onyomi: String,
    #[serde(default)]
    pub kunyomi: String,
    #[serde(rename = "meaning_jp")]
    pub meaning_native: String,
    #[serde(rename = "meaning_en")]
    pub meaning_english: String,
    #[serde(rename = "meaning_bn")]
    pub meaning_local: String,
    #[serde(rename = "strokes")]
    pub stroke_count: u32,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(rename = "related", default, skip_serializing_if = "Option::is_none")]
    pub related_characters: Option<Vec<String>>,
    #[serde(rename = "category")]
    pub category_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "name_jp")]
    pub display_name_native: String,
}

impl CategoryDescriptor {
    pub fn is_sentinel(&self) -> bool {
        self.id == ALL_CATEGORY
    }
}

/// Position of a record in its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub usize);

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Record #{index} has an empty character")]
    EmptyCharacter { index: usize },

    #[error("Record #{index} character '{character}' is not a single character")]
    NotSingleCharacter { index: usize, character: String },

    #[error("Record '{character}' has a stroke count of zero")]
    ZeroStrokes { character: String },

    #[error("Record '{character}' references unknown category '{category}'")]
    UnknownCategory { character: String, category: String },

    #[error("Record '{character}' is labelled with the reserved 'all' category")]
    SentinelCategory { character: String },

    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The fixed record and category lists for one session
#[derive(Debug, Clone)]
pub struct Catalog {
    level: String,
    categories: Vec<CategoryDescriptor>,
    records: Vec<KanjiRecord>,
    character_index: HashMap<String, RecordId>,
}

impl Catalog {
    /// Validate and index. Glyph fields are normalized before validation.
    pub fn new(
        level: impl Into<String>,
        categories: Vec<CategoryDescriptor>,
        mut records: Vec<KanjiRecord>,
    ) -> Result<Self, CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut character_index = HashMap::new();

        for (index, record) in records.iter_mut().enumerate() {
            record.character = normalize_glyph(&record.character);
            if let Some(related) = record.related_characters.as_mut() {
                for glyph in related.iter_mut() {
                    *glyph = normalize_glyph(glyph);
                }
            }

            let mut chars = record.character.chars();
            match (chars.next(), chars.next()) {
                (None, _) => return Err(CatalogError::EmptyCharacter { index }),
                (Some(_), Some(_)) => {
                    return Err(CatalogError::NotSingleCharacter {
                        index,
                        character: record.character.clone(),
                    });
                }
                (Some(_), None) => {}
            }

            if record.stroke_count == 0 {
                return Err(CatalogError::ZeroStrokes {
                    character: record.character.clone(),
                });
            }

            if record.category_id == ALL_CATEGORY {
                return Err(CatalogError::SentinelCategory {
                    character: record.character.clone(),
                });
            }

            if !category_ids.contains(record.category_id.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    character: record.character.clone(),
                    category: record.category_id.clone(),
                });
            }

            // First occurrence wins for glyph lookups
            character_index
                .entry(record.character.clone())
                .or_insert(RecordId(index));
        }

        Ok(Self {
            level: level.into(),
            categories,
            records,
            character_index,
        })
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn records(&self) -> &[KanjiRecord] {
        &self.records
    }

    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&KanjiRecord> {
        self.records.get(id.0)
    }

    pub fn find_by_character(&self, character: &str) -> Option<RecordId> {
        self.character_index
            .get(&normalize_glyph(character))
            .copied()
    }

    pub fn category(&self, id: &str) -> Option<&CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories that label records, without the sentinel
    pub fn real_categories(&self) -> impl Iterator<Item = &CategoryDescriptor> {
        self.categories.iter().filter(|c| !c.is_sentinel())
    }

    pub fn into_parts(self) -> (String, Vec<CategoryDescriptor>, Vec<KanjiRecord>) {
        (self.level, self.categories, self.records)
    }
}
