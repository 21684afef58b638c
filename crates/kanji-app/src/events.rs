use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kanji_core::{BrowseSession, ViewState};
use kanji_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod detail;
pub mod filters;
pub mod view_mode;

use detail::handle_detail_change;
use filters::handle_filter_change;
use view_mode::{handle_mode_change, publish_view};

/// App's main loop.
///
/// Each event is applied and its frames are queued before the next one is
/// received, so the UI always sees state in input order.
pub async fn event_loop(
    state: Arc<AppState>,
    initial: ViewState,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut session = BrowseSession::with_state(state.catalog.clone(), initial);

    app_to_ui_tx.send(AppEvent::BackendReady).await?;
    publish_view(&session, &app_to_ui_tx).await?;
    if session.state().selected_record().is_some() {
        handle_detail_change(&session, &app_to_ui_tx).await?;
    }

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if !handle_events(&mut session, &app_to_ui_tx, event).await? {
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

/// Returns `false` once the session should end
async fn handle_events(
    session: &mut BrowseSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    let AppEvent::UiEvent(event) = event else {
        // Display events only travel towards the UI
        return Ok(true);
    };

    let transition = session.apply(event);
    tracing::debug!("Transition: {:?}", transition);

    if transition.quit {
        app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
        return Ok(false);
    }

    if transition.is_noop() {
        app_to_ui_tx
            .send(AppEvent::StatusUpdate("Nothing to update".to_string()))
            .await?;
        return Ok(true);
    }

    if transition.filters {
        handle_filter_change(session, app_to_ui_tx).await?;
    }

    if transition.mode {
        handle_mode_change(session, app_to_ui_tx).await?;
    }

    if transition.detail {
        handle_detail_change(session, app_to_ui_tx).await?;
    }

    if transition.categories_requested {
        app_to_ui_tx
            .send(AppEvent::ShowCategories(session.category_chips()))
            .await?;
    }

    Ok(true)
}
