use kanal::AsyncSender;
use kanji_core::BrowseSession;
use kanji_types::AppEvent;

/// Show or hide the detail overlay to match the selected record
pub async fn handle_detail_change(
    session: &BrowseSession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = match session.detail() {
        Some(detail) => {
            tracing::debug!("Opening detail for {}", detail.character);
            AppEvent::ShowDetail(detail)
        }
        None => AppEvent::HideDetail,
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}
