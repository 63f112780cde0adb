//! Persistent navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

/// Brand link plus the three page links
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="nav-brand">
                <A href="/">"CivicPulse"</A>
            </div>
            <div class="nav-links">
                <A href="/submit">"Submit Issue"</A>
                <A href="/issues">"View Issues"</A>
                <A href="/dashboard">"Dashboard"</A>
            </div>
        </nav>
    }
}
