//! CivicPulse Web Interface
//!
//! Single-page browser client for reporting civic issues and following
//! tenant performance.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod app;
pub mod components;
pub mod logging;
pub mod pages;
pub mod state;
pub mod storage;

// Re-export the main entry points
pub use api_client::ApiClient;
pub use app::App;
pub use state::AppState;

use civicpulse_core::Config;
use leptos::prelude::*;

/// Mount the application on the document body
pub fn mount(config: Config) {
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
