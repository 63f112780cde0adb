//! Chart placeholders for the dashboard

use civicpulse_core::presentation::chart_payload;
use leptos::prelude::*;
use serde_json::Value;

/// Placeholder panels; the trends panel dumps the data it was given
#[component]
pub fn Charts(
    /// Raw score payload
    #[prop(into)]
    data: Signal<Option<Value>>,
) -> impl IntoView {
    view! {
        <div class="charts-container">
            <div class="chart-placeholder">
                <h3>"Issue Trends"</h3>
                <p>"Chart visualization coming soon..."</p>
                <pre class="chart-data">{move || data.with(|data| chart_payload(data.as_ref()))}</pre>
            </div>
            <div class="chart-placeholder">
                <h3>"Category Distribution"</h3>
                <p>"Chart visualization coming soon..."</p>
            </div>
        </div>
    }
}
