//! 404 Not Found page

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Back to tenant selection"</A>
        </div>
    }
}
