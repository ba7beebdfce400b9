use std::sync::Arc;

use glosa_config::Config;
use glosa_types::AppEvent;
use kanal::AsyncReceiver;
use tokio::sync::RwLock;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let ui_config = config.read().await.ui.clone();
    glosa_ui::ui_loop(app_to_ui_rx, ui_config).await
}
