//! Summary card for one issue

use civicpulse_core::IssueSummary;
use civicpulse_core::presentation::severity_color;
use leptos::prelude::*;

/// Issue card with a severity badge
#[component]
pub fn IssueCard(
    /// Issue to show
    issue: IssueSummary,
) -> impl IntoView {
    let badge_style = format!("background-color: {}", severity_color(&issue.severity));
    let created = created_date(&issue.created_at);
    let description = issue
        .description
        .map(|text| view! { <p class="issue-description">{text}</p> });

    view! {
        <div class="issue-card">
            <div class="issue-header">
                <span class="issue-id">"#" {issue.id}</span>
                <span class="severity-badge" style=badge_style>
                    {issue.severity}
                </span>
            </div>

            <div class="issue-body">
                <div class="issue-category">{issue.category}</div>
                {description}
            </div>

            <div class="issue-footer">
                <span class="issue-status">{issue.status}</span>
                <span class="issue-date">{created}</span>
            </div>
        </div>
    }
}

/// Creation date in the browser's locale
#[cfg(target_arch = "wasm32")]
fn created_date(raw: &str) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_str(raw));
    date.to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn created_date(raw: &str) -> String {
    civicpulse_core::presentation::format_short_date(raw)
}
