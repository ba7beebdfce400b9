use glosa_core::render;
use glosa_types::{AppEvent, Query, ResultSet};
use kanal::AsyncSender;

use crate::state::AppState;

/// Run a query against the current store and send the rendered cards.
pub async fn handle_query(
    state: &AppState,
    query: Query,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let store = state.store().await;
    let records = store.run(&query);
    tracing::debug!("{:?}: {} records", query, records.len());

    let units = render(&records, query.keyword());
    let matched = records.len();

    app_to_ui_tx
        .send(AppEvent::ShowResults(ResultSet {
            query,
            units,
            matched,
        }))
        .await?;

    Ok(())
}

/// Tell the UI about the current store and show all of it.
pub async fn publish_store(state: &AppState, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let store = state.store().await;

    app_to_ui_tx
        .send(AppEvent::DataLoaded {
            records: store.len(),
            categories: store.categories().to_vec(),
        })
        .await?;

    handle_query(state, Query::All, app_to_ui_tx).await
}
