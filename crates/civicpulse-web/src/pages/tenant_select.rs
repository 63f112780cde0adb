//! Tenant selection landing page

use crate::state::AppState;
use crate::storage::BrowserStorage;
use civicpulse_core::forms::{TENANTS, TenantPicker};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tracing::{error, info};

/// Pick one of the known tenants, remember it and move on to the dashboard
#[component]
pub fn TenantSelect() -> impl IntoView {
    let state = expect_context::<AppState>();
    let storage_key = state.config.ui.tenant_storage_key;
    let picker = RwSignal::new(TenantPicker::default());
    let navigate = use_navigate();

    let on_continue = move |_| {
        let confirmed = BrowserStorage::local()
            .and_then(|mut store| picker.get_untracked().confirm(&mut store, &storage_key));

        match confirmed {
            Ok(Some(tenant_id)) => info!(tenant_id, "Tenant selected"),
            Ok(None) => return,
            Err(e) => error!("Failed to remember tenant selection: {e}"),
        }
        navigate("/dashboard", NavigateOptions::default());
    };

    let cards = TENANTS
        .iter()
        .map(|tenant| {
            let id = tenant.id;
            view! {
                <div
                    class="tenant-card"
                    class:selected=move || picker.with(|p| p.is_selected(id))
                    on:click=move |_| picker.update(|p| p.select(id))
                >
                    <h3>{tenant.name}</h3>
                    <span class="tenant-type">{tenant.kind.as_str()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page tenant-select">
            <h1>"CivicPulse Engine"</h1>
            <p>"Select a tenant to get started:"</p>

            <div class="tenant-list">{cards}</div>

            <button
                on:click=on_continue
                disabled=move || picker.with(|p| !p.can_continue())
            >
                "Continue"
            </button>
        </div>
    }
}
