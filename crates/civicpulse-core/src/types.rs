//! Transport shapes exchanged with the `CivicPulse` backend
//!
//! The declared entities (`Tenant`, `Issue`, `Report`, ...) describe the
//! backend's data model. The pages mostly consume looser envelopes
//! (`IssueListResponse`, `TenantScores`, `LeaderboardResponse`) because the
//! backend does not promise the declared shapes on every route.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Tenant identifier type
pub type TenantId = i64;

/// Area identifier type
pub type AreaId = i64;

/// Issue identifier type
pub type IssueId = i64;

/// Report identifier type
pub type ReportId = i64;

/// Kind of organization a tenant represents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TenantKind {
    /// A municipality
    City,
    /// A single building
    Building,
    /// A university or corporate campus
    Campus,
    /// A hotel
    Hotel,
    /// Any other managed facility
    Facility,
}

impl TenantKind {
    /// Wire name of the kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Building => "building",
            Self::Campus => "campus",
            Self::Hotel => "hotel",
            Self::Facility => "facility",
        }
    }
}

impl fmt::Display for TenantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Organization owning issues and reports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    /// Unique identifier
    pub id: TenantId,
    /// Display name
    pub name: String,
    /// Kind of organization
    #[serde(rename = "type")]
    pub kind: TenantKind,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Named zone inside a tenant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Area {
    /// Unique identifier
    pub id: AreaId,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Display name
    pub name: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Issue severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Low severity
    Low,
    /// Medium severity
    Medium,
    /// High severity
    High,
    /// Critical severity
    Critical,
}

impl Severity {
    /// Parse a severity, ignoring ASCII case
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Issue lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    /// Reported and not yet worked on
    Open,
    /// Being worked on
    InProgress,
    /// Fixed, pending closure
    Resolved,
    /// Closed
    Closed,
}

impl IssueStatus {
    /// Every status, in lifecycle order
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Wire name of the status, also used as the filter query value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracked problem
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Unique identifier
    pub id: IssueId,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// Area the issue was located in
    #[serde(default)]
    pub area_id: Option<AreaId>,
    /// Free-form category label
    pub category: String,
    /// Severity
    pub severity: Severity,
    /// Lifecycle status
    pub status: IssueStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Resolution time
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Raw user submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    /// Unique identifier
    pub id: ReportId,
    /// Issue the report was linked to
    #[serde(default)]
    pub issue_id: Option<IssueId>,
    /// Owning tenant
    pub tenant_id: TenantId,
    /// What the user wrote
    pub description: String,
    /// Free-text location
    #[serde(default)]
    pub location: Option<String>,
    /// Submission time
    pub submitted_at: DateTime<Utc>,
    /// Whether the backend has classified it yet
    pub processed: bool,
}

/// Resolution-time measurement for one issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlaMetric {
    /// Unique identifier
    pub id: i64,
    /// Measured issue
    pub issue_id: IssueId,
    /// Hours from creation to resolution
    pub resolution_time_hours: f64,
    /// Whether the SLA target was met
    pub met_sla: bool,
    /// Calculation time
    pub calculated_at: DateTime<Utc>,
}

/// Stored performance score as declared by the backend model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceScore {
    /// Unique identifier
    pub id: i64,
    /// Scored tenant
    pub tenant_id: TenantId,
    /// Scored area, if area-level
    #[serde(default)]
    pub area_id: Option<AreaId>,
    /// Score value
    pub score: f64,
    /// Metric name
    pub metric_type: String,
    /// Calculation time
    pub calculated_at: DateTime<Utc>,
}

/// Body of `POST /reports/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewReport {
    /// Owning tenant
    pub tenant_id: TenantId,
    /// What the user wrote
    pub description: String,
    /// Free-text location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Issue as rendered by the issue list
///
/// Every field defaults, whether absent or `null`, so a partially populated
/// issue still renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IssueSummary {
    /// Unique identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: IssueId,
    /// Free-form category label
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// Severity as sent by the backend
    #[serde(deserialize_with = "null_as_default")]
    pub severity: String,
    /// Status as sent by the backend
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Creation time as sent by the backend
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    /// Optional description
    pub description: Option<String>,
}

/// Body of `GET /issues/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueListResponse {
    /// Matching issues; absent or `null` means none
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<IssueSummary>,
}

impl IssueListResponse {
    /// Decode the issue collection out of a raw response body
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not an object or an issue has a
    /// mistyped field.
    pub fn issues_from(body: serde_json::Value) -> crate::Result<Vec<IssueSummary>> {
        let response: Self = serde_json::from_value(body)?;
        Ok(response.issues)
    }
}

/// Score fields the dashboard renders
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Overall score
    #[serde(default)]
    pub overall: Option<f64>,
    /// Fraction of issues resolved within SLA, `0.0..=1.0`
    #[serde(default)]
    pub sla_compliance: Option<f64>,
    /// Average resolution time in hours
    #[serde(default)]
    pub resolution_time: Option<f64>,
}

/// Body of `GET /scores/tenant/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TenantScores {
    /// Scored tenant
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
    /// Score fields
    #[serde(default)]
    pub scores: ScoreBreakdown,
}

/// Body of `GET /scores/leaderboard`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardResponse {
    /// Entries in backend order; their shape is not fixed. Absent or `null`
    /// means none
    #[serde(default, deserialize_with = "null_as_default")]
    pub leaderboard: Vec<serde_json::Value>,
}

impl LeaderboardResponse {
    /// Decode the entries out of a raw response body
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not an object or `leaderboard` is not
    /// an array.
    pub fn entries_from(body: serde_json::Value) -> crate::Result<Vec<serde_json::Value>> {
        let response: Self = serde_json::from_value(body)?;
        Ok(response.leaderboard)
    }
}

/// Body of `GET /health` and `GET /ready`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// `healthy` or `ready`
    pub status: String,
}

impl HealthStatus {
    /// Decode a `/health` or `/ready` response body
    ///
    /// # Errors
    ///
    /// Returns an error if the body has no string `status`.
    pub fn from_body(body: serde_json::Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(body)?)
    }
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
