//! Display rules shared by the issue cards, score cards and leaderboard

use crate::types::{ScoreBreakdown, Severity};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Placeholder shown for an absent score
pub const NOT_AVAILABLE: &str = "N/A";

/// Badge color for severities outside the known four
pub const NEUTRAL_COLOR: &str = "#6c757d";

/// Badge color for an issue severity, ignoring case
pub fn severity_color(severity: &str) -> &'static str {
    match Severity::parse(severity) {
        Some(Severity::Critical) => "#dc3545",
        Some(Severity::High) => "#fd7e14",
        Some(Severity::Medium) => "#ffc107",
        Some(Severity::Low) => "#28a745",
        None => NEUTRAL_COLOR,
    }
}

/// Label for a status value: first character upper-cased, rest untouched
pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Short `M/D/YYYY` date for a backend timestamp
///
/// Accepts RFC 3339, naive ISO 8601 datetimes (as Python's `isoformat`
/// emits them) and bare dates. Anything else renders as `Invalid Date`.
pub fn format_short_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}

/// Rendered values of the three dashboard score cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCards {
    /// Overall score, one decimal
    pub overall: String,
    /// SLA compliance as a percentage, one decimal
    pub sla_compliance: String,
    /// Average resolution time in hours, one decimal, unit not included
    pub resolution_time: String,
}

impl ScoreCards {
    /// Format each field independently, falling back to `N/A` when absent
    pub fn from_scores(scores: &ScoreBreakdown) -> Self {
        Self {
            overall: one_decimal(scores.overall),
            sla_compliance: scores
                .sla_compliance
                .map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:.1}%", v * 100.0)),
            resolution_time: one_decimal(scores.resolution_time),
        }
    }
}

impl Default for ScoreCards {
    fn default() -> Self {
        Self::from_scores(&ScoreBreakdown::default())
    }
}

fn one_decimal(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.1}"))
}

/// One row of the leaderboard table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// 1-based position in the backend's array
    pub rank: usize,
    /// Entry name
    pub name: String,
    /// Entry score as sent
    pub score: String,
}

/// Rank entries by their position in the backend's array
///
/// The backend's order is authoritative; `score` values are never used to
/// re-sort.
pub fn leaderboard_rows(entries: &[Value]) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| LeaderboardRow {
            rank: index + 1,
            name: display_value(entry.get("name")),
            score: display_value(entry.get("score")),
        })
        .collect()
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Pretty-printed JSON dump the chart placeholder shows
pub fn chart_payload(data: Option<&Value>) -> String {
    data.map_or_else(
        || "null".to_string(),
        |value| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
    )
}
