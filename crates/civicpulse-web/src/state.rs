//! Application state shared with every page through context

use crate::api_client::ApiClient;
use civicpulse_core::Config;

/// Application state holding configuration and clients
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::from_config(&config.api);

        Self { config, api_client }
    }
}
