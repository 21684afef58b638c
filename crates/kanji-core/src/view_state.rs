use kanji_types::ViewMode;

use crate::catalog::{ALL_CATEGORY, RecordId};

/// Transient UI state for one browsing session.
///
/// The four fields change independently: opening a record never touches
/// the mode and switching modes never closes the detail overlay.
/// Every mutator returns whether the state actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_text: String,
    selected_category_id: String,
    selected_record: Option<RecordId>,
    active_mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_category_id: ALL_CATEGORY.to_string(),
            selected_record: None,
            active_mode: ViewMode::default(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_category_id(&self) -> &str {
        &self.selected_category_id
    }

    pub fn selected_record(&self) -> Option<RecordId> {
        self.selected_record
    }

    pub fn active_mode(&self) -> ViewMode {
        self.active_mode
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        replace(&mut self.search_text, text.into())
    }

    /// Any id is accepted; unknown ids simply match nothing
    pub fn set_selected_category(&mut self, id: impl Into<String>) -> bool {
        replace(&mut self.selected_category_id, id.into())
    }

    pub fn open_detail(&mut self, record: RecordId) -> bool {
        replace(&mut self.selected_record, Some(record))
    }

    pub fn close_detail(&mut self) -> bool {
        self.selected_record.take().is_some()
    }

    pub fn set_active_mode(&mut self, mode: ViewMode) -> bool {
        replace(&mut self.active_mode, mode)
    }

    /// Clear search text and select the sentinel category in one step
    pub fn reset_filters(&mut self) -> bool {
        let search = self.set_search_text(String::new());
        let category = self.set_selected_category(ALL_CATEGORY);
        search || category
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty() || self.selected_category_id != ALL_CATEGORY
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
