// Copyright (c) The magicpod-xray Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for the Jira Test Plan client against a mocked endpoint.

use chrono::{Local, TimeZone};
use magicpod_xray_client::{CreatePlanError, JiraClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[tokio::test(flavor = "multi_thread")]
async fn create_test_plan_posts_expected_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        // base64("pm@example.com:jira-token")
        .and(header(
            "Authorization",
            "Basic cG1AZXhhbXBsZS5jb206amlyYS10b2tlbg==",
        ))
        .and(body_json(json!({
            "fields": {
                "project": {"key": "XSP"},
                "summary": "Release 2.3 plan",
                "description": "Plan for the 2.3 regression pass",
                "issuetype": {"name": "Test Plan"},
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "10342",
            "key": "XSP-58",
            "self": "https://example.atlassian.net/rest/api/3/issue/10342",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = JiraClient::new(server.uri(), "pm@example.com", "jira-token");
    let now = Local.with_ymd_and_hms(2024, 5, 13, 9, 41, 0).unwrap();
    let issue = tokio::task::spawn_blocking(move || {
        client.create_test_plan(
            "XSP",
            Some("Release 2.3 plan"),
            Some("Plan for the 2.3 regression pass"),
            now,
        )
    })
    .await
    .unwrap()
    .expect("creation succeeds");

    assert_eq!(issue.key.as_deref(), Some("XSP-58"));
    assert_eq!(issue.id.as_deref(), Some("10342"));
}

#[tokio::test(flavor = "multi_thread")]
async fn defaults_come_from_the_passed_timestamp() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .and(body_json(json!({
            "fields": {
                "project": {"key": "XSP"},
                "summary": "2024-05-13-09-41 MagicPod Test Plan",
                "description": "Created automatically by script",
                "issuetype": {"name": "Test Plan"},
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"key": "XSP-59"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = JiraClient::new(server.uri(), "pm@example.com", "jira-token");
    let now = Local.with_ymd_and_hms(2024, 5, 13, 9, 41, 30).unwrap();
    tokio::task::spawn_blocking(move || client.create_test_plan("XSP", None, None, now))
        .await
        .unwrap()
        .expect("creation succeeds");
}

#[tokio::test(flavor = "multi_thread")]
async fn rejection_surfaces_status_and_body() {
    let server = MockServer::start().await;
    let rejection = r#"{"errors":{"issuetype":"The issue type selected is invalid."}}"#;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(400).set_body_string(rejection))
        .mount(&server)
        .await;

    let client = JiraClient::new(server.uri(), "pm@example.com", "jira-token");
    let now = Local.with_ymd_and_hms(2024, 5, 13, 9, 41, 0).unwrap();
    let err = tokio::task::spawn_blocking(move || client.create_test_plan("XSP", None, None, now))
        .await
        .unwrap()
        .expect_err("creation must fail");

    match err {
        CreatePlanError::Rejected { status, body, .. } => {
            assert_eq!(status, 400);
            assert_eq!(body, rejection);
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}
