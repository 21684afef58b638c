use kanal::AsyncSender;
use kanji_core::BrowseSession;
use kanji_types::{AppEvent, ViewMode};

/// Re-render the result grid after search text or category changed.
///
/// Statistics cover the whole catalog, so stats mode only gets a status line.
pub async fn handle_filter_change(
    session: &BrowseSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let state = session.state();

    if state.active_mode() == ViewMode::Stats {
        let matched = session.filtered().len();
        tracing::debug!("Filters changed while in stats mode, {} matches", matched);
        app_to_ui_tx
            .send(AppEvent::StatusUpdate(format!(
                "{matched} kanji match, /grid to show them"
            )))
            .await?;
        return Ok(());
    }

    let cards = session.cards();
    tracing::debug!(
        "Filters '{}' / '{}' -> {} cards",
        state.search_text(),
        state.selected_category_id(),
        cards.len()
    );

    app_to_ui_tx
        .send(AppEvent::ShowResults {
            cards,
            filters_active: state.has_active_filters(),
        })
        .await?;
    Ok(())
}
