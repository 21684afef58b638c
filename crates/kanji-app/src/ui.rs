use std::io::Write;
use std::sync::Arc;

use kanal::AsyncReceiver;
use kanji_config::Config;
use kanji_types::{AppEvent, UiEvent};
use tokio::sync::RwLock;

use crate::render;

/// Render frames pushed by the event loop until told to close
pub async fn ui_loop<W: Write + Send + 'static>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
    mut out: W,
    interactive: bool,
) -> anyhow::Result<()> {
    let ui_config = config.read().await.ui.clone();

    while let Ok(event) = app_to_ui_rx.recv().await {
        let frame = match event {
            AppEvent::UiEvent(UiEvent::Close) => {
                tracing::debug!("[UI] Close");
                break;
            }
            AppEvent::BackendReady => {
                tracing::debug!("[UI] Backend ready");
                // The first frame follows right away and carries the prompt
                if interactive {
                    writeln!(out, "{}\n", crate::io::HELP)?;
                }
                continue;
            }
            AppEvent::ShowResults {
                cards,
                filters_active,
            } => {
                tracing::debug!("[UI] Showing {} results", cards.len());
                render::render_results(&cards, filters_active, &ui_config)
            }
            AppEvent::ShowStats(stats) => {
                tracing::debug!("[UI] Showing stats for {} kanji", stats.total);
                render::render_stats(&stats, &ui_config)
            }
            AppEvent::ShowDetail(detail) => {
                tracing::debug!("[UI] Detail for {}", detail.character);
                render::render_detail(&detail)
            }
            AppEvent::HideDetail => {
                tracing::debug!("[UI] Detail hidden");
                "» Detail closed\n".to_string()
            }
            AppEvent::ShowCategories(chips) => render::render_categories(&chips),
            AppEvent::StatusUpdate(status) => format!("» {status}\n"),
            AppEvent::UiEvent(_) => continue,
        };

        writeln!(out, "{frame}")?;
        if interactive {
            write!(out, "> ")?;
        }
        out.flush()?;
    }

    Ok(())
}
