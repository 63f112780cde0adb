//! Status and tenant filters for the issue list

use civicpulse_core::forms::{IssueFilters, status_options};
use leptos::prelude::*;

/// Filter controls; every edit emits the full merged filter set
#[component]
pub fn Filters(
    /// Filters currently applied
    #[prop(into)]
    filters: Signal<IssueFilters>,
    /// Receives the updated filters on every change
    on_change: Callback<IssueFilters>,
) -> impl IntoView {
    let options = status_options()
        .into_iter()
        .map(|(value, label)| {
            view! {
                <option
                    value=value
                    prop:selected=move || filters.with(|f| f.status == value)
                >
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="filters">
            <div class="filter-group">
                <label for="status">"Status:"</label>
                <select
                    id="status"
                    on:change=move |ev| {
                        let status = event_target_value(&ev);
                        on_change.run(filters.get_untracked().with_status(status));
                    }
                >
                    {options}
                </select>
            </div>

            <div class="filter-group">
                <label for="tenant">"Tenant ID:"</label>
                <input
                    id="tenant"
                    type="number"
                    min="1"
                    value=filters.with_untracked(IssueFilters::tenant_input)
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        on_change.run(filters.get_untracked().with_tenant_input(&raw));
                    }
                />
            </div>
        </div>
    }
}
