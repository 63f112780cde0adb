//! Loading component for displaying loading states

use leptos::prelude::*;

/// Loading spinner component
#[component]
pub fn Loading(
    /// Text shown under the spinner
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}
