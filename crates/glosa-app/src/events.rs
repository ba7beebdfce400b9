use std::sync::Arc;

use glosa_types::{AppEvent, Query, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod query;
pub mod reload;

use query::{handle_query, publish_store};
use reload::handle_reload;

/// Whether the loop keeps going after an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Initial display: everything, in sheet order
    publish_store(&state, &app_to_ui_tx).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);

        if handle_events(&state, &app_to_ui_tx, event).await? == Flow::Stop {
            tracing::info!("[EVENT_LOOP] Quit requested");
            return Ok(());
        }
    }
}

pub async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    match event {
        AppEvent::UiEvent(UiEvent::Search(keyword)) => {
            handle_query(state, Query::Keyword(keyword), app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::SelectCategory(tag)) => {
            handle_query(state, Query::Category(tag), app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::ShowAll) => {
            handle_query(state, Query::All, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::Reload) => {
            handle_reload(state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::Quit) => {
            app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Quit)).await?;
            return Ok(Flow::Stop);
        }
        AppEvent::UiEvent(ui_event) if ui_event.is_presentation_only() => {
            // The UI owns that state
            app_to_ui_tx.send(AppEvent::UiEvent(ui_event)).await?;
        }
        AppEvent::UiEvent(ui_event) => {
            tracing::warn!("[EVENT_LOOP] Unhandled event: {:?}", ui_event);
        }
        AppEvent::Status(status) => {
            app_to_ui_tx.send(AppEvent::Status(status)).await?;
        }
        AppEvent::ShowResults(_) | AppEvent::DataLoaded { .. } => {
            // UI-only events, ignore in backend
        }
    }

    Ok(Flow::Continue)
}
