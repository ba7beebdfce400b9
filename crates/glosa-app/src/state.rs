use std::sync::Arc;

use glosa_config::Config;
use glosa_core::GlossaryStore;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Replaced as a whole on reload
    store: RwLock<Arc<GlossaryStore>>,
}

impl AppState {
    pub fn new(config: Config, store: GlossaryStore) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            store: RwLock::new(Arc::new(store)),
        }
    }

    /// Snapshot of the current store.
    pub async fn store(&self) -> Arc<GlossaryStore> {
        self.store.read().await.clone()
    }

    pub async fn replace_store(&self, store: GlossaryStore) {
        *self.store.write().await = Arc::new(store);
    }
}
