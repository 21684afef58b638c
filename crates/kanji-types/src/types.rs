use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Cards for the current filtered list, in catalog order
    ShowResults {
        cards: Vec<DisplayCard>,
        /// Search text or a category narrows the list
        filters_active: bool,
    },
    ShowStats(StatsSummary),
    ShowDetail(DisplayDetail),
    HideDetail,
    ShowCategories(Vec<CategoryChip>),
    StatusUpdate(String),
    BackendReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SearchText(String),
    SelectCategory(String),
    /// Clears search text and selects the "all" category
    ResetFilters,
    OpenDetail(DetailTarget),
    CloseDetail(DismissReason),
    SetMode(ViewMode),
    /// Grid <-> Stats
    ToggleMode,
    ListCategories,
    Close,
}

/// Top-level display selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    /// Reserved. Renders the same way as `Grid`.
    List,
    Stats,
}

impl ViewMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            "stats" | "statistics" => Some(ViewMode::Stats),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
            ViewMode::Stats => "stats",
        }
    }

    /// Mode reached from the view toggle
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Stats => ViewMode::Grid,
            ViewMode::Grid | ViewMode::List => ViewMode::Stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailTarget {
    /// Position in the currently displayed result list
    ResultIndex(usize),
    /// Kanji glyph, looked up in the whole catalog
    Character(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Button,
    Backdrop,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub character: String,
    pub meaning_local: String,
    pub meaning_english: String,
    pub stroke_count: u32,
    pub onyomi: Option<String>,
    pub kunyomi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDetail {
    pub character: String,
    pub stroke_count: u32,
    pub meaning_native: String,
    pub meaning_english: String,
    pub meaning_local: String,
    pub onyomi: String,
    pub kunyomi: String,
    pub examples: Vec<String>,
    pub related: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsBar {
    pub label: String,
    pub label_native: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total: usize,
    pub level: String,
    pub category_count: usize,
    pub bars: Vec<StatsBar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub id: String,
    pub label: String,
    pub label_native: String,
    pub selected: bool,
}
