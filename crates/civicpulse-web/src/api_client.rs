//! HTTP client for communicating with the `CivicPulse` API
//!
//! Every call returns the raw JSON body. Pages decode only the fields they
//! render, so a backend adding or dropping fields never breaks a request.

use civicpulse_core::config::ApiConfig;
use civicpulse_core::types::{AreaId, IssueId, NewReport, ReportId, TenantId};
use civicpulse_core::{Error, Result};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

/// Filters and paging for `GET /reports/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportQuery {
    /// Restrict to one tenant
    pub tenant_id: Option<TenantId>,
    /// Number of reports to skip
    pub skip: u32,
    /// Maximum number of reports to return
    pub limit: u32,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            tenant_id: None,
            skip: 0,
            limit: 100,
        }
    }
}

/// API client for making HTTP requests to the `CivicPulse` API server
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client for the configured backend
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the API is up
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn health(&self) -> Result<Value> {
        self.send(self.client.get(self.url("/health"))).await
    }

    /// Check that the API is ready to accept requests
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn ready(&self) -> Result<Value> {
        self.send(self.client.get(self.url("/ready"))).await
    }

    /// Submit a new issue report
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn submit_report(&self, report: &NewReport) -> Result<Value> {
        self.send(self.client.post(self.url("/reports/")).json(report))
            .await
    }

    /// Get a single report
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_report(&self, report_id: ReportId) -> Result<Value> {
        self.send(self.client.get(self.url(&format!("/reports/{report_id}"))))
            .await
    }

    /// List reports
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn list_reports(&self, query: &ReportQuery) -> Result<Value> {
        let url = with_query(
            self.url("/reports/"),
            &[
                ("tenant_id", query.tenant_id.map(|id| id.to_string())),
                ("skip", Some(query.skip.to_string())),
                ("limit", Some(query.limit.to_string())),
            ],
        );
        self.send(self.client.get(url)).await
    }

    /// List issues, optionally filtered by tenant and status
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn list_issues(
        &self,
        tenant_id: Option<TenantId>,
        status: Option<&str>,
    ) -> Result<Value> {
        let url = with_query(
            self.url("/issues/"),
            &[
                ("tenant_id", tenant_id.map(|id| id.to_string())),
                ("status", status.map(ToString::to_string)),
            ],
        );
        self.send(self.client.get(url)).await
    }

    /// Get a single issue
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_issue(&self, issue_id: IssueId) -> Result<Value> {
        self.send(self.client.get(self.url(&format!("/issues/{issue_id}"))))
            .await
    }

    /// Apply a partial update to an issue; the payload is passed through as-is
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn update_issue(&self, issue_id: IssueId, update: &Value) -> Result<Value> {
        self.send(
            self.client
                .patch(self.url(&format!("/issues/{issue_id}")))
                .json(update),
        )
        .await
    }

    /// Get performance scores for a tenant
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_tenant_scores(&self, tenant_id: TenantId) -> Result<Value> {
        self.send(
            self.client
                .get(self.url(&format!("/scores/tenant/{tenant_id}"))),
        )
        .await
    }

    /// Get performance scores for an area
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_area_scores(&self, area_id: AreaId) -> Result<Value> {
        self.send(self.client.get(self.url(&format!("/scores/area/{area_id}"))))
            .await
    }

    /// Get the leaderboard, optionally for one tenant
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_leaderboard(&self, tenant_id: Option<TenantId>) -> Result<Value> {
        let url = with_query(
            self.url("/scores/leaderboard"),
            &[("tenant_id", tenant_id.map(|id| id.to_string()))],
        );
        self.send(self.client.get(url)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let request = request.build().map_err(|e| Error::Http {
            message: format!("Failed to build request: {e}"),
        })?;
        let method = request.method().clone();
        let url = request.url().to_string();
        debug!(%method, %url, "calling CivicPulse API");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| Error::Http {
                message: format!("{method} {url}: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await.map_err(|e| Error::Http {
            message: format!("Failed to read response from {url}: {e}"),
        })?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Append the present parameters to `url`, percent-encoding their values
fn with_query(mut url: String, params: &[(&str, Option<String>)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|value| format!("{key}={}", urlencoding::encode(value)))
        })
        .collect();

    if !query.is_empty() {
        url.push('?');
        url.push_str(&query.join("&"));
    }

    url
}
