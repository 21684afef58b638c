use std::sync::Arc;

use kanji_types::{CategoryChip, DetailTarget, DisplayCard, DisplayDetail, StatsSummary, UiEvent};

use crate::aggregate::summarize;
use crate::catalog::{Catalog, KanjiRecord, RecordId};
use crate::filter::filter_ids;
use crate::readings::{display_readings, primary_reading};
use crate::view_state::ViewState;

/// What a single event changed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub filters: bool,
    pub detail: bool,
    pub mode: bool,
    pub categories_requested: bool,
    pub quit: bool,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Filter result cached under the inputs that produced it
#[derive(Debug)]
struct FilterMemo {
    search_text: String,
    category_id: String,
    ids: Vec<RecordId>,
}

/// View state plus the derivations it drives.
///
/// The filtered list is memoized on `(search text, category)` and refreshed
/// inside every mutation, so readers never observe a stale result.
#[derive(Debug)]
pub struct BrowseSession {
    catalog: Arc<Catalog>,
    state: ViewState,
    memo: FilterMemo,
}

impl BrowseSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_state(catalog, ViewState::default())
    }

    pub fn with_state(catalog: Arc<Catalog>, state: ViewState) -> Self {
        let memo = FilterMemo {
            ids: filter_ids(
                catalog.records(),
                state.search_text(),
                state.selected_category_id(),
            ),
            search_text: state.search_text().to_string(),
            category_id: state.selected_category_id().to_string(),
        };

        Self {
            catalog,
            state,
            memo,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Apply one user action
    pub fn apply(&mut self, event: UiEvent) -> Transition {
        let mut transition = Transition::default();

        match event {
            UiEvent::SearchText(text) => {
                transition.filters = self.state.set_search_text(text);
            }
            UiEvent::SelectCategory(id) => {
                transition.filters = self.state.set_selected_category(id);
            }
            UiEvent::ResetFilters => {
                transition.filters = self.state.reset_filters();
            }
            UiEvent::OpenDetail(target) => match self.resolve(&target) {
                Some(id) => transition.detail = self.state.open_detail(id),
                None => tracing::warn!("No record for detail target {:?}", target),
            },
            UiEvent::CloseDetail(reason) => {
                tracing::debug!("Closing detail ({:?})", reason);
                transition.detail = self.state.close_detail();
            }
            UiEvent::SetMode(mode) => {
                transition.mode = self.state.set_active_mode(mode);
            }
            UiEvent::ToggleMode => {
                let next = self.state.active_mode().toggled();
                transition.mode = self.state.set_active_mode(next);
            }
            UiEvent::ListCategories => transition.categories_requested = true,
            UiEvent::Close => transition.quit = true,
        }

        if transition.filters {
            self.refresh();
        }

        transition
    }

    fn refresh(&mut self) {
        let search_text = self.state.search_text();
        let category_id = self.state.selected_category_id();

        if self.memo.search_text == search_text && self.memo.category_id == category_id {
            return;
        }

        self.memo = FilterMemo {
            ids: filter_ids(self.catalog.records(), search_text, category_id),
            search_text: search_text.to_string(),
            category_id: category_id.to_string(),
        };
        tracing::debug!(
            "Filter '{}' in '{}' matched {} records",
            self.memo.search_text,
            self.memo.category_id,
            self.memo.ids.len()
        );
    }

    fn resolve(&self, target: &DetailTarget) -> Option<RecordId> {
        match target {
            DetailTarget::ResultIndex(index) => self.memo.ids.get(*index).copied(),
            DetailTarget::Character(glyph) => self.catalog.find_by_character(glyph),
        }
    }

    /// Current filter result, in catalog order
    pub fn filtered(&self) -> Vec<&KanjiRecord> {
        self.memo
            .ids
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect()
    }

    pub fn selected(&self) -> Option<&KanjiRecord> {
        self.state
            .selected_record()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn cards(&self) -> Vec<DisplayCard> {
        self.filtered().into_iter().map(card).collect()
    }

    pub fn detail(&self) -> Option<DisplayDetail> {
        self.selected().map(detail)
    }

    pub fn stats(&self) -> StatsSummary {
        summarize(&self.catalog)
    }

    pub fn category_chips(&self) -> Vec<CategoryChip> {
        self.catalog
            .categories()
            .iter()
            .map(|c| CategoryChip {
                id: c.id.clone(),
                label: c.display_name.clone(),
                label_native: c.display_name_native.clone(),
                selected: c.id == self.state.selected_category_id(),
            })
            .collect()
    }
}

pub fn card(record: &KanjiRecord) -> DisplayCard {
    DisplayCard {
        character: record.character.clone(),
        meaning_local: record.meaning_local.clone(),
        meaning_english: record.meaning_english.clone(),
        stroke_count: record.stroke_count,
        onyomi: primary_reading(&record.onyomi).map(str::to_string),
        kunyomi: primary_reading(&record.kunyomi).map(str::to_string),
    }
}

pub fn detail(record: &KanjiRecord) -> DisplayDetail {
    DisplayDetail {
        character: record.character.clone(),
        stroke_count: record.stroke_count,
        meaning_native: record.meaning_native.clone(),
        meaning_english: record.meaning_english.clone(),
        meaning_local: record.meaning_local.clone(),
        onyomi: display_readings(&record.onyomi),
        kunyomi: display_readings(&record.kunyomi),
        examples: record.examples.clone(),
        related: record.related_characters.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use kanji_types::{DismissReason, ViewMode};

    use super::*;
    use crate::catalog::tests::{category, nature_catalog, record};
    use crate::catalog::{ALL_CATEGORY, CategoryDescriptor};
    use crate::filter::filter;

    fn session() -> BrowseSession {
        BrowseSession::new(Arc::new(nature_catalog()))
    }

    fn assert_fresh(session: &BrowseSession) {
        let fresh = filter(
            session.catalog().records(),
            session.state().search_text(),
            session.state().selected_category_id(),
        );
        assert_eq!(session.filtered(), fresh);
    }

    #[test]
    fn test_initial_state_lists_everything() {
        let session = session();
        assert_eq!(session.filtered().len(), 2);
        assert_eq!(session.state().active_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_memo_tracks_every_filter_change() {
        let mut session = session();
        let events = [
            UiEvent::SearchText("w".into()),
            UiEvent::SearchText("wa".into()),
            UiEvent::SelectCategory("nonexistent-id".into()),
            UiEvent::SelectCategory("nature".into()),
            UiEvent::SearchText("".into()),
            UiEvent::SearchText("FIRE".into()),
            UiEvent::ResetFilters,
        ];

        for event in events {
            session.apply(event);
            assert_fresh(&session);
        }
        assert_eq!(session.filtered().len(), 2);
    }

    #[test]
    fn test_unknown_category_is_empty_not_error() {
        let mut session = session();
        let transition = session.apply(UiEvent::SelectCategory("nonexistent-id".into()));
        assert!(transition.filters);
        assert!(session.filtered().is_empty());
        assert!(session.cards().is_empty());
    }

    #[test]
    fn test_open_close_detail_keeps_mode() {
        let mut session = session();
        session.apply(UiEvent::SetMode(ViewMode::Stats));

        let t = session.apply(UiEvent::OpenDetail(DetailTarget::Character("火".into())));
        assert!(t.detail);
        assert!(!t.mode);
        assert_eq!(session.selected().map(|r| r.character.as_str()), Some("火"));
        assert_eq!(session.state().active_mode(), ViewMode::Stats);

        let t = session.apply(UiEvent::CloseDetail(DismissReason::Backdrop));
        assert!(t.detail);
        assert_eq!(session.state().selected_record(), None);
        assert_eq!(session.state().active_mode(), ViewMode::Stats);
    }

    #[test]
    fn test_stats_mode_with_open_detail() {
        let mut session = session();
        session.apply(UiEvent::OpenDetail(DetailTarget::ResultIndex(0)));
        let t = session.apply(UiEvent::SetMode(ViewMode::Stats));

        assert!(t.mode);
        assert!(!t.detail);
        assert_eq!(session.state().active_mode(), ViewMode::Stats);
        assert_eq!(session.state().selected_record(), Some(RecordId(0)));
    }

    #[test]
    fn test_result_index_uses_filtered_list() {
        let mut session = session();
        session.apply(UiEvent::SearchText("fire".into()));
        session.apply(UiEvent::OpenDetail(DetailTarget::ResultIndex(0)));
        assert_eq!(session.state().selected_record(), Some(RecordId(1)));
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut session = session();
        let t = session.apply(UiEvent::OpenDetail(DetailTarget::ResultIndex(5)));
        assert!(t.is_noop());
        let t = session.apply(UiEvent::OpenDetail(DetailTarget::Character("木".into())));
        assert!(t.is_noop());
        assert_eq!(session.state().selected_record(), None);
    }

    #[test]
    fn test_toggle_mode() {
        let mut session = session();
        session.apply(UiEvent::ToggleMode);
        assert_eq!(session.state().active_mode(), ViewMode::Stats);
        session.apply(UiEvent::ToggleMode);
        assert_eq!(session.state().active_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_card_and_detail_views() {
        let mut rec = record("日", "Sun, Day", "time");
        rec.onyomi = "ニチ、ジツ".into();
        rec.kunyomi = String::new();
        rec.related_characters = Some(vec!["月".into()]);
        let categories: Vec<CategoryDescriptor> = vec![category(ALL_CATEGORY, "All"), category("time", "Time")];
        let catalog = Catalog::new("N5", categories, vec![rec]).unwrap();
        let mut session = BrowseSession::new(Arc::new(catalog));

        let cards = session.cards();
        assert_eq!(cards[0].onyomi.as_deref(), Some("ニチ"));
        assert_eq!(cards[0].kunyomi, None);

        assert!(session.detail().is_none());
        session.apply(UiEvent::OpenDetail(DetailTarget::ResultIndex(0)));
        let detail = session.detail().unwrap();
        assert_eq!(detail.onyomi, "ニチ、ジツ");
        assert_eq!(detail.kunyomi, "-");
        assert_eq!(detail.related, vec!["月".to_string()]);
    }

    #[test]
    fn test_category_chips_mark_selection() {
        let mut session = session();
        session.apply(UiEvent::SelectCategory("nature".into()));
        let chips = session.category_chips();
        let selected: Vec<_> = chips.iter().filter(|c| c.selected).map(|c| c.id.as_str()).collect();
        assert_eq!(selected, vec!["nature"]);
    }

    #[test]
    fn test_close_and_listing_flags() {
        let mut session = session();
        assert!(session.apply(UiEvent::ListCategories).categories_requested);
        assert!(session.apply(UiEvent::Close).quit);
    }
}
