use std::sync::Arc;

use clap::Parser;
use kanji_config::log::LogConfig;
use kanji_core::ViewState;
use kanji_lang_japanese::CatalogLoader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod profile;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = profile::load_config(cli.config.as_deref())?;
    init_tracing(&config.log);

    let catalog = CatalogLoader::load(
        config.catalog.use_embedded,
        &config.catalog.additional_paths,
    )?;

    let initial = initial_view_state(&cli);
    let state = Arc::new(AppState::new(config, catalog));
    let controller = AppController::new(state).await;

    let interactive = !cli.once && atty::is(atty::Stream::Stdin);
    let (mut ui, mut tasks) = controller.spawn_tasks(initial, !cli.once, interactive);

    if cli.once {
        controller.request_close().await?;
    }

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            ui.abort();
        }
        result = &mut ui => {
            match result {
                Ok(Ok(())) => tracing::debug!("UI closed"),
                Ok(Err(e)) => tracing::error!("UI loop failed: {e}"),
                Err(e) => tracing::error!("UI task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("task exited with error: {e}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    Ok(())
}

fn initial_view_state(cli: &Cli) -> ViewState {
    let mut state = ViewState::new();
    if let Some(search) = &cli.search {
        state.set_search_text(search.clone());
    }
    if let Some(category) = &cli.category {
        state.set_selected_category(category.clone());
    }
    if let Some(mode) = cli.mode {
        state.set_active_mode(mode);
    }
    state
}

/// Logs go to stderr, stdout is the display
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
