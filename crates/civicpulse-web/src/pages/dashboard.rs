//! Performance dashboard: score cards, charts and the leaderboard

use crate::api_client::ApiClient;
use crate::components::{charts::Charts, loading::Loading};
use crate::state::AppState;
use civicpulse_core::Result;
use civicpulse_core::presentation::{LeaderboardRow, ScoreCards, leaderboard_rows};
use civicpulse_core::types::{LeaderboardResponse, TenantId, TenantScores};
use futures::future::try_join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Dashboard for the configured tenant
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let client = state.api_client;
    let tenant_id = state.config.ui.default_tenant_id;

    let score_data = RwSignal::new(None::<Value>);
    let leaderboard = RwSignal::new(Vec::<Value>::new());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match load_dashboard(&client, tenant_id).await {
            Ok((scores, entries)) => {
                debug!(tenant_id, entries = entries.len(), "Loaded dashboard");
                score_data.set(Some(scores));
                leaderboard.set(entries);
            }
            Err(e) => error!(tenant_id, "Failed to load dashboard: {e}"),
        }
        loading.set(false);
    });

    let cards = Memo::new(move |_| {
        score_data.with(|data| {
            data.as_ref().map_or_else(ScoreCards::default, |value| {
                match serde_json::from_value::<TenantScores>(value.clone()) {
                    Ok(scores) => ScoreCards::from_scores(&scores.scores),
                    Err(e) => {
                        warn!("Unexpected score payload: {e}");
                        ScoreCards::default()
                    }
                }
            })
        })
    });
    let rows = Memo::new(move |_| leaderboard.with(|entries| leaderboard_rows(entries)));

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| {
                view! {
                    <div class="page dashboard">
                        <Loading message="Loading dashboard..." />
                    </div>
                }
            }
        >
            <div class="page dashboard">
                <h1>"Performance Dashboard"</h1>

                <div class="score-cards">
                    <ScoreCard
                        title="Overall Score"
                        value=Signal::derive(move || cards.with(|c| c.overall.clone()))
                    />
                    <ScoreCard
                        title="SLA Compliance"
                        value=Signal::derive(move || cards.with(|c| c.sla_compliance.clone()))
                    />
                    <ScoreCard
                        title="Avg Resolution Time"
                        value=Signal::derive(move || cards.with(|c| c.resolution_time.clone()))
                        unit=" hrs"
                    />
                </div>

                <Charts data=score_data />

                <div class="leaderboard">
                    <h2>"Leaderboard"</h2>
                    <Show
                        when=move || rows.with(|r| !r.is_empty())
                        fallback=|| view! { <p>"No leaderboard data available."</p> }
                    >
                        <table>
                            <thead>
                                <tr>
                                    <th>"Rank"</th>
                                    <th>"Name"</th>
                                    <th>"Score"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || rows.get().into_iter().map(leaderboard_row).collect_view()}
                            </tbody>
                        </table>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// Fetch the tenant's raw scores and the leaderboard entries together
///
/// # Errors
///
/// Returns the first error of either request; the other result is dropped.
pub async fn load_dashboard(
    client: &ApiClient,
    tenant_id: TenantId,
) -> Result<(Value, Vec<Value>)> {
    let (scores, board) = try_join(
        client.get_tenant_scores(tenant_id),
        client.get_leaderboard(Some(tenant_id)),
    )
    .await?;

    Ok((scores, LeaderboardResponse::entries_from(board)?))
}

/// One headline number
#[component]
fn ScoreCard(
    title: &'static str,
    value: Signal<String>,
    #[prop(optional)] unit: &'static str,
) -> impl IntoView {
    view! {
        <div class="score-card">
            <h3>{title}</h3>
            <div class="score-value">{move || value.get()} {unit}</div>
        </div>
    }
}

fn leaderboard_row(row: LeaderboardRow) -> impl IntoView {
    view! {
        <tr>
            <td>{row.rank}</td>
            <td>{row.name}</td>
            <td>{row.score}</td>
        </tr>
    }
}
