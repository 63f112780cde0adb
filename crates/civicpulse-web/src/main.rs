//! Browser entry point for the CivicPulse web interface
#![forbid(unsafe_code)]

use civicpulse_core::Config;
use civicpulse_web::{logging, mount};
use tracing::{info, warn};

fn main() {
    // Get configuration
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize tracing
    if let Err(e) = logging::init(&config.logging) {
        web_sys::console::error_1(&format!("Failed to initialize logging: {e}").into());
    }

    if let Some(e) = load_error {
        warn!("Failed to load config: {e}, using defaults");
    }

    info!(api = %config.api.base_url, "Starting CivicPulse web interface");

    mount(config);
}
