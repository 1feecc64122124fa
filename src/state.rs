use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::modules::movie::repository::MovieStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn MovieStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn MovieStore>) -> Self {
        Self { config, store }
    }
}
