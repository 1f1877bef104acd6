use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config::Config, store::FollowerStore};

pub struct AppState {
    pub config: Config,
    pub store: FollowerStore,
    /// Serializes the load-mutate-save cycle of mutating handlers so two
    /// concurrent writes cannot drop each other's changes.
    pub write_lock: Mutex<()>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let store = FollowerStore::new(config.data_path.clone());

        Arc::new(Self {
            config,
            store,
            write_lock: Mutex::new(()),
        })
    }
}
