//! Upstream client tests against a stubbed ERP API.
//!
//! These run hermetically: wiremock stands in for the upstream, so the
//! whole error taxonomy and the boundary conversions are exercised without
//! a live backend.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meridian_core::access::{UserClass, classify};
use meridian_core::{Channel, DeliveryStatus, WorkflowInstanceId, WorkflowStatus};
use meridian_shell::config::ErpApiConfig;
use meridian_shell::erp::{ErpClient, ErpError};

async fn client_for(server: &MockServer) -> ErpClient {
    let config = ErpApiConfig {
        base_url: format!("{}/api/", server.uri())
            .parse()
            .expect("valid url"),
        timeout: Duration::from_secs(2),
    };
    ErpClient::new(&config).expect("client")
}

#[tokio::test]
async fn login_exchanges_credentials_for_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-123" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let token = client.login("jdoe", "hunter2").await.expect("login");
    assert_eq!(token, "tok-123");
}

#[tokio::test]
async fn login_maps_bad_credentials_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/token/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.login("jdoe", "wrong").await.expect_err("must fail");
    assert!(matches!(err, ErpError::Unauthorized));
}

#[tokio::test]
async fn login_extracts_field_errors_from_400() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/token/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "username": ["This field is required."] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.login("", "pw").await.expect_err("must fail");
    match err {
        ErpError::Validation(fields) => {
            assert_eq!(
                fields.field("username"),
                Some(&["This field is required.".to_owned()][..])
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn current_user_sends_bearer_token_and_coalesces_departments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me/"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "username": "svega",
            "role": "sales_rep",
            "department": null,
            "department_name": "  SALES ",
            "is_superuser": false,
            "accessible_modules": []
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let user = client.current_user("tok-123").await.expect("profile");

    assert_eq!(user.department.as_deref(), Some("SALES"));
    assert_eq!(classify(&user), UserClass::Sales);
}

#[tokio::test]
async fn expired_token_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.current_user("stale").await.expect_err("must fail");
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn departments_are_cached_across_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hr/departments/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Sales", "supervisor": "M. Reyes" },
            { "id": 2, "name": "Finance" }
        ])))
        // The second fetch must come from the cache.
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let first = client.departments("tok").await.expect("departments");
    let second = client.departments("tok").await.expect("departments");

    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "Sales");
    assert_eq!(first[0].supervisor.as_deref(), Some("M. Reyes"));
    assert_eq!(second.len(), 2);
}

#[tokio::test]
async fn workflow_instance_not_found_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/workflows/instances/99/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .workflow_instance("tok", WorkflowInstanceId::new(99))
        .await
        .expect_err("must fail");
    assert!(matches!(err, ErpError::NotFound));
}

#[tokio::test]
async fn workflow_instance_decodes_status_and_approvals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/workflows/instances/4/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "template": 2,
            "status": "escalated",
            "current_step": "finance_review",
            "approvals": [
                { "step": "manager_review", "approver": "A. Chan",
                  "approved": true, "decided_at": "2026-03-10T08:30:00Z" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let instance = client
        .workflow_instance("tok", WorkflowInstanceId::new(4))
        .await
        .expect("instance");

    assert_eq!(instance.status, WorkflowStatus::Escalated);
    assert_eq!(instance.current_step.as_deref(), Some("finance_review"));
    assert_eq!(instance.approvals.len(), 1);
}

#[tokio::test]
async fn notification_records_decode_channels_and_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/workflows/instances/4/notification-status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "channel": "email", "stage": "submit", "status": "delivered",
              "sent_at": "2026-03-10T08:00:00Z" },
            { "channel": "in_app", "stage": "submit", "status": "failed",
              "sent_at": "2026-03-10T08:01:00Z" }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let records = client
        .notification_records("tok", WorkflowInstanceId::new(4))
        .await
        .expect("records");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].channel, Channel::Email);
    assert_eq!(records[1].channel, Channel::InApp);
    assert_eq!(records[1].status, DeliveryStatus::Failed);
}

#[tokio::test]
async fn server_errors_map_to_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/hr/employees/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.employees("tok").await.expect_err("must fail");
    assert!(matches!(err, ErpError::UnexpectedStatus(503)));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.current_user("tok").await.expect_err("must fail");
    assert!(matches!(err, ErpError::Decode(_)));
}
