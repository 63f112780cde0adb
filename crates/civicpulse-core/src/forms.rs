//! Form and filter state for the pages
//!
//! Each type holds exactly what a page keeps between renders and exposes the
//! transitions the page performs, so the transitions can be tested without a
//! browser.

use crate::Result;
use crate::presentation::status_label;
use crate::storage::SelectionStore;
use crate::types::{IssueStatus, NewReport, TenantId, TenantKind};

/// Message shown after the backend accepted a report
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Report submitted successfully!";

/// Message shown after any failure to submit a report
pub const SUBMIT_ERROR_MESSAGE: &str = "Error submitting report. Please try again.";

/// Draft of the issue report form plus its submission state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    /// Tenant the report is filed under
    pub tenant_id: TenantId,
    /// Description text area
    pub description: String,
    /// Location input; empty means not given
    pub location: String,
    /// Whether a submission is in flight
    pub submitting: bool,
    /// Result of the last submission; empty until one finishes
    pub message: String,
}

impl ReportForm {
    /// Empty form for `tenant_id`
    pub const fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            description: String::new(),
            location: String::new(),
            submitting: false,
            message: String::new(),
        }
    }

    /// Enter the submitting state and build the request body
    ///
    /// Returns `None` without changing anything when a submission is already
    /// in flight or the description is empty.
    pub fn begin_submit(&mut self) -> Option<NewReport> {
        if self.submitting || self.description.is_empty() {
            return None;
        }

        self.submitting = true;
        self.message.clear();

        Some(NewReport {
            tenant_id: self.tenant_id,
            description: self.description.clone(),
            location: (!self.location.is_empty()).then(|| self.location.clone()),
        })
    }

    /// Leave the submitting state with the outcome of the request
    ///
    /// Success clears the text fields but keeps the tenant.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if succeeded {
            self.description.clear();
            self.location.clear();
            self.message = SUBMIT_SUCCESS_MESSAGE.to_string();
        } else {
            self.message = SUBMIT_ERROR_MESSAGE.to_string();
        }
        self.submitting = false;
    }

    /// Label of the submit button
    pub const fn button_label(&self) -> &'static str {
        if self.submitting {
            "Submitting..."
        } else {
            "Submit Report"
        }
    }
}

/// Filters applied to the issue list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFilters {
    /// Tenant filter; `None` when the input does not hold a number
    pub tenant_id: Option<TenantId>,
    /// Status filter; empty means all statuses
    pub status: String,
}

impl IssueFilters {
    /// Filters for one tenant across all statuses
    pub const fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id: Some(tenant_id),
            status: String::new(),
        }
    }

    /// Copy with the status replaced
    #[must_use]
    pub fn with_status(&self, status: impl Into<String>) -> Self {
        Self {
            tenant_id: self.tenant_id,
            status: status.into(),
        }
    }

    /// Copy with the tenant parsed from the raw number input
    #[must_use]
    pub fn with_tenant_input(&self, raw: &str) -> Self {
        Self {
            tenant_id: raw.trim().parse().ok(),
            status: self.status.clone(),
        }
    }

    /// Status query parameter, omitted for "all"
    pub fn status_param(&self) -> Option<&str> {
        (!self.status.is_empty()).then_some(self.status.as_str())
    }

    /// Value shown in the tenant number input
    pub fn tenant_input(&self) -> String {
        self.tenant_id.map(|id| id.to_string()).unwrap_or_default()
    }
}

/// `(value, label)` pairs of the status select, "All" first
pub fn status_options() -> Vec<(&'static str, String)> {
    std::iter::once(("", "All".to_string()))
        .chain(
            IssueStatus::ALL
                .iter()
                .map(|status| (status.as_str(), status_label(status.as_str()))),
        )
        .collect()
}

/// Tenant offered on the selection page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantOption {
    /// Tenant id
    pub id: TenantId,
    /// Display name
    pub name: &'static str,
    /// Kind badge
    pub kind: TenantKind,
}

/// Tenants offered on the selection page
pub const TENANTS: [TenantOption; 3] = [
    TenantOption {
        id: 1,
        name: "City of Springfield",
        kind: TenantKind::City,
    },
    TenantOption {
        id: 2,
        name: "Downtown Tower",
        kind: TenantKind::Building,
    },
    TenantOption {
        id: 3,
        name: "State University Campus",
        kind: TenantKind::Campus,
    },
];

/// Highlighted tenant on the selection page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TenantPicker {
    selected: Option<TenantId>,
}

impl TenantPicker {
    /// Highlight `tenant_id`, replacing any previous highlight
    pub const fn select(&mut self, tenant_id: TenantId) {
        self.selected = Some(tenant_id);
    }

    /// Whether `tenant_id` is the highlighted tenant
    pub fn is_selected(&self, tenant_id: TenantId) -> bool {
        self.selected == Some(tenant_id)
    }

    /// Whether the continue action is enabled
    pub const fn can_continue(&self) -> bool {
        self.selected.is_some()
    }

    /// Persist the highlighted tenant id as a string under `key`
    ///
    /// Returns the persisted id, or `None` when nothing is highlighted (the
    /// store is left untouched).
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn confirm<S>(&self, store: &mut S, key: &str) -> Result<Option<TenantId>>
    where
        S: SelectionStore + ?Sized,
    {
        let Some(tenant_id) = self.selected else {
            return Ok(None);
        };

        store.save(key, &tenant_id.to_string())?;
        Ok(Some(tenant_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn filled_form() -> ReportForm {
        let mut form = ReportForm::new(1);
        form.description = "Overflowing bin on the corner".to_string();
        form.location = "Main St & 1st Ave".to_string();
        form
    }

    #[test]
    fn test_begin_submit_builds_payload() {
        let mut form = filled_form();

        let payload = form.begin_submit().unwrap();

        assert_eq!(
            payload,
            NewReport {
                tenant_id: 1,
                description: "Overflowing bin on the corner".to_string(),
                location: Some("Main St & 1st Ave".to_string()),
            }
        );
        assert!(form.submitting);
        assert_eq!(form.button_label(), "Submitting...");
    }

    #[test]
    fn test_begin_submit_empty_location_is_absent() {
        let mut form = filled_form();
        form.location.clear();

        assert_eq!(form.begin_submit().unwrap().location, None);
    }

    #[test]
    fn test_begin_submit_refused_while_in_flight_or_empty() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());

        let mut empty = ReportForm::new(1);
        assert!(empty.begin_submit().is_none());
        assert!(!empty.submitting);
    }

    #[test]
    fn test_begin_submit_clears_previous_message() {
        let mut form = filled_form();
        form.message = SUBMIT_ERROR_MESSAGE.to_string();

        form.begin_submit();

        assert_eq!(form.message, "");
    }

    #[test]
    fn test_successful_submit_resets_text_fields() {
        let mut form = filled_form();
        form.begin_submit();

        form.finish_submit(true);

        assert_eq!(form.description, "");
        assert_eq!(form.location, "");
        assert_eq!(form.tenant_id, 1);
        assert_eq!(form.message, "Report submitted successfully!");
        assert!(!form.submitting);
        assert_eq!(form.button_label(), "Submit Report");
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut form = filled_form();
        form.begin_submit();

        form.finish_submit(false);

        assert_eq!(form.description, "Overflowing bin on the corner");
        assert_eq!(form.location, "Main St & 1st Ave");
        assert_eq!(form.message, "Error submitting report. Please try again.");
        assert!(!form.submitting);
    }

    #[test]
    fn test_filter_changes_keep_the_other_field() {
        let filters = IssueFilters::new(1);

        let by_status = filters.with_status("open");
        assert_eq!(by_status.tenant_id, Some(1));
        assert_eq!(by_status.status_param(), Some("open"));

        let by_tenant = by_status.with_tenant_input("4");
        assert_eq!(by_tenant.tenant_id, Some(4));
        assert_eq!(by_tenant.status_param(), Some("open"));
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case(" 3 ", Some(3))]
    #[case("", None)]
    #[case("abc", None)]
    fn test_tenant_input_parsing(#[case] raw: &str, #[case] expected: Option<TenantId>) {
        let filters = IssueFilters::new(1).with_tenant_input(raw);
        assert_eq!(filters.tenant_id, expected);
    }

    #[test]
    fn test_all_status_is_omitted() {
        let filters = IssueFilters::new(1);
        assert_eq!(filters.status_param(), None);
        assert_eq!(filters.tenant_input(), "1");
        assert_eq!(filters.with_tenant_input("").tenant_input(), "");
    }

    #[test]
    fn test_status_options() {
        assert_eq!(
            status_options(),
            vec![
                ("", "All".to_string()),
                ("open", "Open".to_string()),
                ("in-progress", "In-progress".to_string()),
                ("resolved", "Resolved".to_string()),
                ("closed", "Closed".to_string()),
            ]
        );
    }

    #[test]
    fn test_picker_requires_selection() {
        let picker = TenantPicker::default();
        let mut store = MemoryStore::new();

        assert!(!picker.can_continue());
        assert_eq!(picker.confirm(&mut store, "selectedTenant").unwrap(), None);
        assert_eq!(store.load("selectedTenant").unwrap(), None);
    }

    #[test]
    fn test_picker_persists_selection_as_string() {
        let mut picker = TenantPicker::default();
        let mut store = MemoryStore::new();

        picker.select(2);
        picker.select(3);

        assert!(picker.can_continue());
        assert!(picker.is_selected(3));
        assert!(!picker.is_selected(2));
        assert_eq!(picker.confirm(&mut store, "selectedTenant").unwrap(), Some(3));
        assert_eq!(store.load("selectedTenant").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_tenant_catalog() {
        let ids: Vec<_> = TENANTS.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(TENANTS[2].kind, TenantKind::Campus);
    }
}
