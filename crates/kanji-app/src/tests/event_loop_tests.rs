use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use kanji_config::Config;
use kanji_core::{ALL_CATEGORY, Catalog, CategoryDescriptor, KanjiRecord, ViewState};
use kanji_types::{AppEvent, DetailTarget, DismissReason, UiEvent, ViewMode};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

fn record(character: &str, english: &str) -> KanjiRecord {
    KanjiRecord {
        character: character.to_string(),
        onyomi: String::new(),
        kunyomi: String::new(),
        meaning_native: String::new(),
        meaning_english: english.to_string(),
        meaning_local: String::new(),
        stroke_count: 4,
        examples: vec![],
        related_characters: None,
        category_id: "nature".to_string(),
    }
}

fn category(id: &str, name: &str) -> CategoryDescriptor {
    CategoryDescriptor {
        id: id.to_string(),
        display_name: name.to_string(),
        display_name_native: name.to_string(),
    }
}

struct Harness {
    to_app: AsyncSender<AppEvent>,
    from_app: AsyncReceiver<AppEvent>,
    handle: JoinHandle<anyhow::Result<()>>,
    cancel: CancellationToken,
}

impl Harness {
    fn start(initial: ViewState) -> Self {
        let catalog = Catalog::new(
            "N5",
            vec![category(ALL_CATEGORY, "All"), category("nature", "Nature")],
            vec![record("水", "water"), record("火", "fire")],
        )
        .expect("valid catalog");
        let state = Arc::new(AppState::new(Config::default(), catalog));

        let (to_app, app_rx) = kanal::bounded_async(64);
        let (app_tx, from_app) = kanal::bounded_async(64);
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(event_loop(state, initial, app_rx, app_tx, cancel.clone()));

        Self {
            to_app,
            from_app,
            handle,
            cancel,
        }
    }

    async fn send(&self, event: UiEvent) {
        self.to_app
            .send(AppEvent::UiEvent(event))
            .await
            .expect("send failed");
    }

    async fn next(&self) -> AppEvent {
        match timeout(Duration::from_secs(2), self.from_app.recv()).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout - event never arrived!"),
        }
    }

    /// Skip BackendReady and the first frame
    async fn ready(&self) -> AppEvent {
        assert!(matches!(self.next().await, AppEvent::BackendReady));
        self.next().await
    }

    async fn assert_quiet(&self) {
        let result = timeout(Duration::from_millis(100), self.from_app.recv()).await;
        assert!(result.is_err(), "unexpected event: {:?}", result);
    }
}

#[tokio::test]
async fn test_initial_frame_follows_mode() {
    let harness = Harness::start(ViewState::new());
    match harness.ready().await {
        AppEvent::ShowResults { cards, .. } => assert_eq!(cards.len(), 2),
        other => panic!("Wrong event type: {:?}", other),
    }

    let mut stats_first = ViewState::new();
    stats_first.set_active_mode(ViewMode::Stats);
    let harness = Harness::start(stats_first);
    match harness.ready().await {
        AppEvent::ShowStats(stats) => {
            assert_eq!(stats.total, 2);
            assert_eq!(stats.bars.len(), 1);
            assert_eq!(stats.bars[0].count, 2);
        }
        other => panic!("Wrong event type: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_then_empty_then_reset() {
    let harness = Harness::start(ViewState::new());
    harness.ready().await;

    harness.send(UiEvent::SearchText("water".into())).await;
    match harness.next().await {
        AppEvent::ShowResults { cards, .. } => {
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].character, "水");
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    harness
        .send(UiEvent::SelectCategory("nonexistent-id".into()))
        .await;
    match harness.next().await {
        AppEvent::ShowResults {
            cards,
            filters_active,
        } => {
            assert!(cards.is_empty());
            assert!(filters_active);
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    harness.send(UiEvent::ResetFilters).await;
    match harness.next().await {
        AppEvent::ShowResults {
            cards,
            filters_active,
        } => {
            assert_eq!(cards.len(), 2);
            assert!(!filters_active);
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    // Already at defaults: nothing to redraw, only a status line
    harness.send(UiEvent::ResetFilters).await;
    match harness.next().await {
        AppEvent::StatusUpdate(status) => assert_eq!(status, "Nothing to update"),
        other => panic!("Wrong event type: {:?}", other),
    }
    harness.assert_quiet().await;
}

#[tokio::test]
async fn test_open_then_close_detail_keeps_mode() {
    let harness = Harness::start(ViewState::new());
    harness.ready().await;

    harness
        .send(UiEvent::OpenDetail(DetailTarget::Character("火".into())))
        .await;
    match harness.next().await {
        AppEvent::ShowDetail(detail) => assert_eq!(detail.character, "火"),
        other => panic!("Wrong event type: {:?}", other),
    }

    harness
        .send(UiEvent::CloseDetail(DismissReason::Cancel))
        .await;
    assert!(matches!(harness.next().await, AppEvent::HideDetail));

    // Mode never changed, so toggling lands on stats
    harness.send(UiEvent::ToggleMode).await;
    assert!(matches!(harness.next().await, AppEvent::ShowStats(_)));
}

#[tokio::test]
async fn test_stats_mode_with_detail_open() {
    let harness = Harness::start(ViewState::new());
    harness.ready().await;

    harness
        .send(UiEvent::OpenDetail(DetailTarget::ResultIndex(0)))
        .await;
    assert!(matches!(harness.next().await, AppEvent::ShowDetail(_)));

    harness.send(UiEvent::SetMode(ViewMode::Stats)).await;
    assert!(matches!(harness.next().await, AppEvent::ShowStats(_)));

    // Detail survives the mode switch; closing it is still a change
    harness
        .send(UiEvent::CloseDetail(DismissReason::Backdrop))
        .await;
    assert!(matches!(harness.next().await, AppEvent::HideDetail));

    // Filters do not redraw the stats view, they report the match count
    harness.send(UiEvent::SearchText("fire".into())).await;
    match harness.next().await {
        AppEvent::StatusUpdate(status) => assert!(status.starts_with("1 kanji match")),
        other => panic!("Wrong event type: {:?}", other),
    }
    harness.assert_quiet().await;
}

#[tokio::test]
async fn test_unresolved_detail_reports_no_change() {
    let harness = Harness::start(ViewState::new());
    harness.ready().await;

    harness
        .send(UiEvent::OpenDetail(DetailTarget::ResultIndex(7)))
        .await;
    assert!(matches!(harness.next().await, AppEvent::StatusUpdate(_)));

    harness
        .send(UiEvent::CloseDetail(DismissReason::Button))
        .await;
    assert!(matches!(harness.next().await, AppEvent::StatusUpdate(_)));
    harness.assert_quiet().await;
}

#[tokio::test]
async fn test_list_mode_renders_as_grid() {
    let harness = Harness::start(ViewState::new());
    harness.ready().await;

    harness.send(UiEvent::SetMode(ViewMode::List)).await;
    match harness.next().await {
        AppEvent::ShowResults { cards, .. } => assert_eq!(cards.len(), 2),
        other => panic!("Wrong event type: {:?}", other),
    }
}

#[tokio::test]
async fn test_close_forwards_to_ui_and_stops() {
    let harness = Harness::start(ViewState::new());
    harness.ready().await;

    harness.send(UiEvent::ListCategories).await;
    match harness.next().await {
        AppEvent::ShowCategories(chips) => {
            assert_eq!(chips.len(), 2);
            assert!(chips[0].selected);
        }
        other => panic!("Wrong event type: {:?}", other),
    }

    harness.send(UiEvent::Close).await;
    assert!(matches!(
        harness.next().await,
        AppEvent::UiEvent(UiEvent::Close)
    ));

    let result = timeout(Duration::from_secs(2), harness.handle)
        .await
        .expect("event loop did not stop");
    assert!(result.expect("event loop panicked").is_ok());
}

#[tokio::test]
async fn test_cancel_stops_event_loop() {
    let harness = Harness::start(ViewState::new());
    harness.ready().await;

    harness.cancel.cancel();
    let result = timeout(Duration::from_secs(2), harness.handle)
        .await
        .expect("event loop did not stop");
    assert!(result.expect("event loop panicked").is_ok());
}
