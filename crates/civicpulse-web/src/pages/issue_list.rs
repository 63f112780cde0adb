//! Filterable issue list

use crate::api_client::ApiClient;
use crate::components::{filters::Filters, issue_card::IssueCard, loading::Loading};
use crate::state::AppState;
use civicpulse_core::Result;
use civicpulse_core::forms::IssueFilters;
use civicpulse_core::sequence::RequestSequence;
use civicpulse_core::types::{IssueListResponse, IssueSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error};

/// Issues for the current filters, refetched whenever a filter changes
#[component]
pub fn IssueList() -> impl IntoView {
    let state = expect_context::<AppState>();
    let client = state.api_client;
    let filters = RwSignal::new(IssueFilters::new(state.config.ui.default_tenant_id));
    let issues = RwSignal::new(Vec::<IssueSummary>::new());
    let loading = RwSignal::new(true);
    let sequence = RequestSequence::new();

    Effect::new(move |_| {
        let current = filters.get();
        let client = client.clone();
        let sequence = sequence.clone();
        loading.set(true);

        spawn_local(async move {
            let Some(result) = load_issues(&client, &current, &sequence).await else {
                debug!(?current, "Dropping superseded issue list response");
                return;
            };

            match result {
                Ok(fetched) => {
                    debug!(count = fetched.len(), "Loaded issues");
                    issues.set(fetched);
                }
                Err(e) => error!("Failed to load issues: {e}"),
            }
            loading.set(false);
        });
    });

    let on_change = Callback::new(move |next: IssueFilters| filters.set(next));

    view! {
        <div class="page issue-list">
            <h1>"Issues"</h1>

            <Filters filters=filters on_change=on_change />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <Loading message="Loading issues..." /> }
            >
                <div class="issues-grid">
                    <Show
                        when=move || issues.with(|list| !list.is_empty())
                        fallback=|| view! { <p>"No issues found."</p> }
                    >
                        {move || {
                            issues
                                .get()
                                .into_iter()
                                .map(|issue| view! { <IssueCard issue=issue /> })
                                .collect_view()
                        }}
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Fetch the issues matching `filters`
///
/// Returns `None` when another load started on `sequence` after this one, so
/// only the most recent filters ever reach the page.
pub async fn load_issues(
    client: &ApiClient,
    filters: &IssueFilters,
    sequence: &RequestSequence,
) -> Option<Result<Vec<IssueSummary>>> {
    let ticket = sequence.begin();
    let result = client
        .list_issues(filters.tenant_id, filters.status_param())
        .await
        .and_then(IssueListResponse::issues_from);

    sequence.is_current(ticket).then_some(result)
}
