use kanal::AsyncSender;
use kanji_core::BrowseSession;
use kanji_types::{AppEvent, ViewMode};

pub async fn handle_mode_change(
    session: &BrowseSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("View mode -> {}", session.state().active_mode().as_str());
    publish_view(session, app_to_ui_tx).await
}

/// Send the frame for the active mode. `List` has no layout of its own and
/// renders as the grid.
pub async fn publish_view(
    session: &BrowseSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = match session.state().active_mode() {
        ViewMode::Stats => AppEvent::ShowStats(session.stats()),
        ViewMode::Grid | ViewMode::List => AppEvent::ShowResults {
            cards: session.cards(),
            filters_active: session.state().has_active_filters(),
        },
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}
