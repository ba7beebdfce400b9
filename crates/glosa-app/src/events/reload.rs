use glosa_types::AppEvent;
use kanal::AsyncSender;

use crate::loader::load_store;
use crate::state::AppState;

use super::query::publish_store;

/// Fetch the document again and swap the store. On failure the old store
/// stays in place and the UI gets a status line.
pub async fn handle_reload(state: &AppState, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let config = state.config.read().await.clone();

    match load_store(&config).await {
        Ok(store) => {
            tracing::info!("Reloaded glossary: {} records", store.len());
            state.replace_store(store).await;
            publish_store(state, app_to_ui_tx).await?;
        }
        Err(e) => {
            tracing::warn!("Reload failed: {e:#}");
            app_to_ui_tx
                .send(AppEvent::Status(format!("Reload failed: {e:#}")))
                .await?;
        }
    }

    Ok(())
}
