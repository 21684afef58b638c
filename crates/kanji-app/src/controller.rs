use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kanji_core::ViewState;
use kanji_types::{AppEvent, UiEvent};
use tokio::task::{JoinHandle, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{input_loop, spawn_stdin_reader};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Both directions of the event bus
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Owns the channels and the shutdown token for one browsing session
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(state: Arc<AppState>) -> Self {
        let capacity = state.config.read().await.channel_capacity;
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Spawn the event loop and, when `read_input` is set, the stdin reader.
    /// Returns the UI task, which ends when the session closes.
    pub fn spawn_tasks(
        &self,
        initial: ViewState,
        read_input: bool,
        interactive: bool,
    ) -> (JoinHandle<anyhow::Result<()>>, JoinSet<anyhow::Result<()>>) {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            initial,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Input
        if read_input {
            tasks.spawn(input_loop(
                spawn_stdin_reader(),
                self.channels.ui_to_app.0.clone(),
                self.channels.app_to_ui.0.clone(),
                self.cancel_token.child_token(),
            ));
        }

        // UI loop
        let ui = tokio::spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.clone(),
            std::io::stdout(),
            interactive,
        ));

        (ui, tasks)
    }

    /// Queue a close request behind everything already sent
    pub async fn request_close(&self) -> anyhow::Result<()> {
        self.channels
            .ui_to_app
            .0
            .send(AppEvent::UiEvent(UiEvent::Close))
            .await?;
        Ok(())
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
