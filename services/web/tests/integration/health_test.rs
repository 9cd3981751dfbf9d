use axum::http::StatusCode;
use serde_json::json;

use readygate_web::config::ReadinessTrigger;

use crate::helpers::TestApp;

// ── GET /health with startup trigger ─────────────────────────────────────────

#[tokio::test]
async fn should_report_starting_with_uptime_during_warmup() {
    let app = TestApp::new(45, ReadinessTrigger::Startup);
    app.gate.mark_ready();
    app.at(10);

    let resp = app.server.get("/health").await;
    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    resp.assert_json(&json!({ "status": "starting", "uptime": "10.0s" }));
}

#[tokio::test]
async fn should_follow_45s_scenario() {
    let app = TestApp::new(45, ReadinessTrigger::Startup);

    app.at(10);
    let resp = app.server.get("/health").await;
    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.json::<serde_json::Value>()["status"], "starting");

    app.at(50);
    let resp = app.server.get("/health").await;
    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    resp.assert_json(&json!({ "status": "not-ready" }));

    app.gate.mark_ready();
    let resp = app.server.get("/health").await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn should_be_healthy_immediately_without_warmup() {
    let app = TestApp::new(0, ReadinessTrigger::Startup);
    app.gate.mark_ready();

    let resp = app.server.get("/health").await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn should_stay_not_ready_without_mark_under_startup_trigger() {
    let app = TestApp::new(0, ReadinessTrigger::Startup);

    for _ in 0..3 {
        let resp = app.server.get("/health").await;
        resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        resp.assert_json(&json!({ "status": "not-ready" }));
    }
    assert!(!app.gate.is_ready());
}

// ── GET /health with first-request trigger ───────────────────────────────────

#[tokio::test]
async fn should_mark_ready_on_first_request() {
    let app = TestApp::new(30, ReadinessTrigger::FirstRequest);
    assert!(!app.gate.is_ready());

    app.server.get("/").await.assert_status_ok();
    assert!(app.gate.is_ready());

    // Still inside warmup: readiness does not override the threshold.
    app.at(29);
    let resp = app.server.get("/health").await;
    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.json::<serde_json::Value>()["status"], "starting");

    app.at(30);
    let resp = app.server.get("/health").await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn first_request_to_health_already_sees_ready() {
    let app = TestApp::new(0, ReadinessTrigger::FirstRequest);

    let resp = app.server.get("/health").await;
    resp.assert_status_ok();
    resp.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn unknown_path_counts_as_first_request() {
    let app = TestApp::new(0, ReadinessTrigger::FirstRequest);

    app.server
        .get("/nope")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert!(app.gate.is_ready());
}
