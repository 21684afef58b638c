use std::sync::Arc;

use kanji_config::Config;
use kanji_core::Catalog;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            catalog: Arc::new(catalog),
        }
    }
}
