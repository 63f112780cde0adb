//! Main Leptos application component with routing

use crate::api_client::ApiClient;
use crate::components::navbar::Navbar;
use crate::pages::{
    dashboard::Dashboard, issue_list::IssueList, not_found::NotFound,
    submit_issue::SubmitIssue, tenant_select::TenantSelect,
};
use crate::state::AppState;
use civicpulse_core::Config;
use civicpulse_core::types::HealthStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use tracing::{info, warn};

/// Main application component
#[component]
pub fn App(
    /// Loaded configuration
    config: Config,
) -> impl IntoView {
    let state = AppState::new(config);
    check_backend(state.api_client.clone());
    provide_context(state);

    view! {
        <Router>
            <div class="app">
                <Navbar />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=TenantSelect />
                        <Route path=path!("/submit") view=SubmitIssue />
                        <Route path=path!("/issues") view=IssueList />
                        <Route path=path!("/dashboard") view=Dashboard />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Log whether the backend answers its health and readiness checks
fn check_backend(client: ApiClient) {
    spawn_local(async move {
        let (health, ready) = futures::join!(client.health(), client.ready());

        match health.and_then(HealthStatus::from_body) {
            Ok(health) => info!(status = %health.status, "API health check passed"),
            Err(e) => warn!("API health check failed: {e}"),
        }
        match ready.and_then(HealthStatus::from_body) {
            Ok(ready) => info!(status = %ready.status, "API readiness check passed"),
            Err(e) => warn!("API readiness check failed: {e}"),
        }
    });
}
