//! Issue report submission form

use crate::state::AppState;
use civicpulse_core::forms::{ReportForm, SUBMIT_SUCCESS_MESSAGE};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, error};

/// Report form for the configured tenant
#[component]
pub fn SubmitIssue() -> impl IntoView {
    let state = expect_context::<AppState>();
    let client = state.api_client;
    let form = RwSignal::new(ReportForm::new(state.config.ui.default_tenant_id));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut payload = None;
        form.update(|f| payload = f.begin_submit());
        let Some(report) = payload else {
            return;
        };

        let client = client.clone();
        spawn_local(async move {
            let result = client.submit_report(&report).await;
            match &result {
                Ok(body) => debug!(%body, "Report submitted"),
                Err(e) => error!("Failed to submit report: {e}"),
            }
            form.update(|f| f.finish_submit(result.is_ok()));
        });
    };

    let message = move || form.with(|f| f.message.clone());
    let message_class = move || {
        form.with(|f| {
            if f.message == SUBMIT_SUCCESS_MESSAGE {
                "message success"
            } else {
                "message error"
            }
        })
    };

    view! {
        <div class="page submit-issue">
            <h1>"Submit an Issue Report"</h1>
            <form class="issue-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        placeholder="Describe the issue..."
                        rows="6"
                        required
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            form.update(|f| f.description = text);
                        }
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="location">"Location (optional)"</label>
                    <input
                        id="location"
                        type="text"
                        placeholder="e.g., Main St & 1st Ave"
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            form.update(|f| f.location = text);
                        }
                    />
                </div>

                <button type="submit" disabled=move || form.with(|f| f.submitting)>
                    {move || form.with(ReportForm::button_label)}
                </button>

                <Show when=move || form.with(|f| !f.message.is_empty())>
                    <div class=message_class>{message}</div>
                </Show>
            </form>
        </div>
    }
}
