use std::sync::Arc;

use glosa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(app_to_ui_capacity: usize, ui_to_app_capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(app_to_ui_capacity),
            ui_to_app: kanal::bounded_async(ui_to_app_capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub async fn new(state: Arc<AppState>) -> Self {
        let channels = {
            let config = state.config.read().await;
            ChannelSet::new(config.app_to_ui_capacity, config.ui_to_app_capacity)
        };

        Self {
            channels,
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Push an event straight to the UI.
    pub async fn notify(&self, event: AppEvent) -> anyhow::Result<()> {
        self.channels.app_to_ui.0.send(event).await?;
        Ok(())
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.state.config.clone(),
        ));

        // Stdin watcher
        tasks.spawn(watcher_io(
            self.cancel_token.child_token(),
            self.channels.ui_to_app.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
