//! Integration tests for the CivicPulse API client against a mock backend

use civicpulse_core::types::{HealthStatus, IssueListResponse, LeaderboardResponse, NewReport};
use civicpulse_core::{Error, Result};
use civicpulse_web::api_client::{ApiClient, ReportQuery};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_backend() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri());
    (server, client)
}

/// Health and readiness checks hit their own routes
#[tokio::test]
async fn test_health_and_ready() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ready"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ready"})))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(HealthStatus::from_body(client.health().await?)?.status, "healthy");
    assert_eq!(HealthStatus::from_body(client.ready().await?)?.status, "ready");

    Ok(())
}

/// Report submission posts the draft as JSON and omits an absent location
#[tokio::test]
async fn test_submit_report_without_location() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("POST"))
        .and(path("/reports/"))
        .and(body_json(json!({
            "tenant_id": 1,
            "description": "Streetlight out on Elm St"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42, "tenant_id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let report = NewReport {
        tenant_id: 1,
        description: "Streetlight out on Elm St".to_string(),
        location: None,
    };
    let created = client.submit_report(&report).await?;

    assert_eq!(created["id"], 42);

    Ok(())
}

/// Report submission carries the location when one is given
#[tokio::test]
async fn test_submit_report_with_location() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("POST"))
        .and(path("/reports/"))
        .and(body_json(json!({
            "tenant_id": 2,
            "description": "Elevator stuck",
            "location": "Lobby"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let report = NewReport {
        tenant_id: 2,
        description: "Elevator stuck".to_string(),
        location: Some("Lobby".to_string()),
    };
    client.submit_report(&report).await?;

    Ok(())
}

/// Single lookups address the resource by id
#[tokio::test]
async fn test_get_report_and_issue() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/reports/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/issues/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "status": "open"})))
        .mount(&server)
        .await;

    assert_eq!(client.get_report(5).await?["id"], 5);
    assert_eq!(client.get_issue(9).await?["status"], "open");

    Ok(())
}

/// Report listing sends paging defaults
#[tokio::test]
async fn test_list_reports_default_paging() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/reports/"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("tenant_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reports": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.list_reports(&ReportQuery::default()).await?;
    assert_eq!(body["total"], 0);

    Ok(())
}

/// Report listing narrows to a tenant
#[tokio::test]
async fn test_list_reports_for_tenant() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/reports/"))
        .and(query_param("tenant_id", "3"))
        .and(query_param("skip", "20"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reports": []})))
        .expect(1)
        .mount(&server)
        .await;

    let query = ReportQuery {
        tenant_id: Some(3),
        skip: 20,
        limit: 10,
    };
    client.list_reports(&query).await?;

    Ok(())
}

/// Issue listing forwards both filters and decodes the collection
#[tokio::test]
async fn test_list_issues_with_filters() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/issues/"))
        .and(query_param("tenant_id", "1"))
        .and(query_param("status", "in-progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [
                {
                    "id": 11,
                    "category": "pothole",
                    "severity": "high",
                    "status": "in-progress",
                    "created_at": "2024-05-01T12:00:00Z"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.list_issues(Some(1), Some("in-progress")).await?;
    let issues = IssueListResponse::issues_from(body)?;

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].id, 11);
    assert_eq!(issues[0].description, None);

    Ok(())
}

/// Absent filters are left out of the query string entirely
#[tokio::test]
async fn test_list_issues_without_filters() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/issues/"))
        .and(query_param_is_missing("tenant_id"))
        .and(query_param_is_missing("status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.list_issues(None, None).await?;
    assert!(IssueListResponse::issues_from(body)?.is_empty());

    Ok(())
}

/// Issue updates are patched through unchanged
#[tokio::test]
async fn test_update_issue_passes_payload_through() -> Result<()> {
    let (server, client) = mock_backend().await;
    let update = json!({"status": "resolved", "assigned_to": "crew-4"});

    Mock::given(method("PATCH"))
        .and(path("/issues/9"))
        .and(body_json(update.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "status": "resolved"})))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client.update_issue(9, &update).await?;
    assert_eq!(updated["status"], "resolved");

    Ok(())
}

/// Score lookups for tenants and areas
#[tokio::test]
async fn test_scores() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/scores/tenant/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tenant_id": 1,
            "scores": {"overall": 82.5, "sla_compliance": 0.873}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/scores/area/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"area_id": 4, "scores": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let tenant = client.get_tenant_scores(1).await?;
    assert_eq!(tenant["scores"]["overall"], 82.5);

    let area = client.get_area_scores(4).await?;
    assert_eq!(area["area_id"], 4);

    Ok(())
}

/// Leaderboard keeps backend order and scopes by tenant when asked
#[tokio::test]
async fn test_leaderboard() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/scores/leaderboard"))
        .and(query_param("tenant_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "leaderboard": [
                {"name": "Ward 3", "score": 71.0},
                {"name": "Ward 1", "score": 90.0}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/scores/leaderboard"))
        .and(query_param_is_missing("tenant_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leaderboard": []})))
        .expect(1)
        .mount(&server)
        .await;

    let entries = LeaderboardResponse::entries_from(client.get_leaderboard(Some(1)).await?)?;
    assert_eq!(entries[0]["name"], "Ward 3");
    assert_eq!(entries[1]["name"], "Ward 1");

    let all = LeaderboardResponse::entries_from(client.get_leaderboard(None).await?)?;
    assert!(all.is_empty());

    Ok(())
}

/// Non-2xx responses become status errors carrying the code
#[tokio::test]
async fn test_error_status_is_reported() {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/issues/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Issue not found"})))
        .mount(&server)
        .await;

    let err = client.get_issue(404).await.unwrap_err();
    match err {
        Error::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/issues/404"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

/// An empty body is returned as null
#[tokio::test]
async fn test_empty_body_is_null() -> Result<()> {
    let (server, client) = mock_backend().await;

    Mock::given(method("PATCH"))
        .and(path("/issues/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = client.update_issue(1, &json!({"status": "closed"})).await?;
    assert!(body.is_null());

    Ok(())
}

/// A body that is not JSON is a serialization error
#[tokio::test]
async fn test_invalid_json_body() {
    let (server, client) = mock_backend().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

/// Connection failures are transport errors
#[tokio::test]
async fn test_unreachable_backend() {
    let client = ApiClient::new("http://127.0.0.1:1");

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, Error::Http { .. }));
}
