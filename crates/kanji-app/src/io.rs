use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use kanji_types::{AppEvent, DetailTarget, DismissReason, UiEvent, ViewMode};
use tokio_util::sync::CancellationToken;

pub const HELP: &str = "\
Commands:
  <text> | /search <text>   search kanji, English, Bangla or readings
  /clear                    clear the search text
  /category <id>            filter by category (/categories to list)
  /reset                    clear search and category
  /open <n|kanji>           open the detail view
  /close | /esc | /dismiss  close the detail view
  /grid | /list | /stats    switch view (/toggle flips grid and stats)
  /help                     show this help
  /quit                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Help,
    Unknown(String),
    Empty,
}

/// Parse one input line. Plain text is a search.
pub fn parse_command(line: &str) -> Command {
    if line.trim().is_empty() {
        return Command::Empty;
    }

    let Some(command) = line.trim_start().strip_prefix('/') else {
        return Command::Event(UiEvent::SearchText(line.to_string()));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };

    let event = match name.to_lowercase().as_str() {
        "search" | "s" => UiEvent::SearchText(arg.to_string()),
        "clear" => UiEvent::SearchText(String::new()),
        "category" | "cat" | "c" if arg.is_empty() => UiEvent::SelectCategory("all".to_string()),
        "category" | "cat" | "c" => UiEvent::SelectCategory(arg.to_string()),
        "categories" => UiEvent::ListCategories,
        "reset" => UiEvent::ResetFilters,
        "open" | "o" if !arg.is_empty() => UiEvent::OpenDetail(detail_target(arg)),
        "close" => UiEvent::CloseDetail(DismissReason::Button),
        "esc" | "escape" => UiEvent::CloseDetail(DismissReason::Cancel),
        "dismiss" => UiEvent::CloseDetail(DismissReason::Backdrop),
        "grid" => UiEvent::SetMode(ViewMode::Grid),
        "list" => UiEvent::SetMode(ViewMode::List),
        "stats" => UiEvent::SetMode(ViewMode::Stats),
        "mode" => match ViewMode::parse(arg) {
            Some(mode) => UiEvent::SetMode(mode),
            None => return Command::Unknown(line.trim().to_string()),
        },
        "toggle" => UiEvent::ToggleMode,
        "help" | "h" | "?" => return Command::Help,
        "quit" | "exit" | "q" => UiEvent::Close,
        _ => return Command::Unknown(line.trim().to_string()),
    };

    Command::Event(event)
}

/// Numbers are 1-based positions in the shown list, anything else a glyph
fn detail_target(arg: &str) -> DetailTarget {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => DetailTarget::ResultIndex(n - 1),
        _ => DetailTarget::Character(arg.to_string()),
    }
}

/// Read stdin lines on a dedicated thread.
///
/// Blocking reads stay off the runtime so shutdown never waits on the
/// terminal. The channel closes at EOF.
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded(16);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("stdin reader stopping");
    });

    rx.to_async()
}

/// Turn input lines into UI events
pub async fn input_loop(
    lines: AsyncReceiver<String>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.recv() => line,
        };

        let Ok(line) = line else {
            tracing::info!("Input closed, shutting down");
            ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            break;
        };

        match parse_command(&line) {
            Command::Event(event) => {
                let quit = event == UiEvent::Close;
                ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                if quit {
                    break;
                }
            }
            Command::Help => {
                app_to_ui_tx
                    .send(AppEvent::StatusUpdate(HELP.to_string()))
                    .await?;
            }
            Command::Unknown(input) => {
                tracing::warn!("Unknown command: {}", input);
                app_to_ui_tx
                    .send(AppEvent::StatusUpdate(format!(
                        "Unknown command '{input}', type /help"
                    )))
                    .await?;
            }
            Command::Empty => {}
        }
    }

    Ok(())
}
