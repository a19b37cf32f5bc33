//! Server shared state
//!
//! Holds the loaded configuration. Requests are computed from their own
//! inputs and only read the config for defaults.

use crate::config::Config;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Arc<RwLock<Config>>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Copy of the current configuration
    pub async fn config(&self) -> Config {
        self.config.read().await.clone()
    }
}
