// Drives the HTTP router in-process with `tower::ServiceExt::oneshot`.
// Timer tests run on a paused tokio clock so the real tick source can be
// advanced deterministically.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use study_timer::{create_router, AppState};

fn app() -> Router {
    let state = Arc::new(AppState::new(20554, "127.0.0.1".to_string(), 1500, 60));
    create_router(state)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn elapse(secs: u64) {
    tokio::time::sleep(Duration::from_secs(secs) + Duration::from_millis(100)).await;
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn fresh_timer_is_idle() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/timer", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    assert_eq!(body["remaining_seconds"], 1500);
    assert_eq!(body["clock"], "25:00");
    assert_eq!(body["progress"], 0.0);
    assert_eq!(body["subject"], Value::Null);
}

#[tokio::test(start_paused = true)]
async fn start_without_subject_is_unprocessable() {
    let app = app();
    let (status, body) = call(&app, Method::POST, "/timer/start", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "select a subject first");

    let (_, timer) = call(&app, Method::GET, "/timer", None).await;
    assert_eq!(timer["status"], "idle");

    let (_, notifications) = call(&app, Method::GET, "/notifications", None).await;
    assert_eq!(notifications[0]["kind"], "subject_required");
}

#[tokio::test(start_paused = true)]
async fn full_session_completes() {
    let app = app();
    let (status, body) = call(
        &app,
        Method::PUT,
        "/timer/subject",
        Some(json!({ "subject": "Math" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["subject"], "Math");

    let (status, body) = call(&app, Method::POST, "/timer/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["status"], "running");

    elapse(1500).await;

    let (_, timer) = call(&app, Method::GET, "/timer", None).await;
    assert_eq!(timer["status"], "idle");
    assert_eq!(timer["sessions_completed_today"], 1);
    assert_eq!(timer["total_study_seconds_today"], 1500);
    assert_eq!(timer["total_study_minutes_today"], 25);

    let (_, notifications) = call(&app, Method::GET, "/notifications", None).await;
    assert_eq!(notifications[0]["kind"], "session_completed");
    assert_eq!(notifications[0]["severity"], "celebrate");
}

#[tokio::test(start_paused = true)]
async fn pause_resume_and_stop() {
    let app = app();
    call(&app, Method::PUT, "/timer/subject", Some(json!({ "subject": "Physics" }))).await;
    call(&app, Method::POST, "/timer/start", None).await;
    elapse(60).await;

    let (_, body) = call(&app, Method::POST, "/timer/pause", None).await;
    assert_eq!(body["timer"]["status"], "paused");
    assert_eq!(body["timer"]["remaining_seconds"], 1440);

    elapse(300).await;
    call(&app, Method::POST, "/timer/start", None).await;
    elapse(30).await;

    let (status, body) = call(&app, Method::POST, "/timer/stop", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recorded_seconds"], 90);
    assert_eq!(body["timer"]["total_study_seconds_today"], 90);
    assert_eq!(body["timer"]["sessions_completed_today"], 0);
    assert_eq!(body["timer"]["status"], "idle");
    assert_eq!(body["timer"]["remaining_seconds"], 1500);

    let (_, status) = call(&app, Method::GET, "/status", None).await;
    assert_eq!(status["ticking"], false);
    assert_eq!(status["last_action"], "stop");
}

#[tokio::test(start_paused = true)]
async fn reset_discards_elapsed_time() {
    let app = app();
    call(&app, Method::PUT, "/timer/subject", Some(json!({ "subject": "History" }))).await;
    call(&app, Method::POST, "/timer/start", None).await;
    elapse(200).await;

    let (_, body) = call(&app, Method::POST, "/timer/reset", None).await;
    assert_eq!(body["timer"]["remaining_seconds"], 1500);
    assert_eq!(body["timer"]["total_study_seconds_today"], 0);

    elapse(10).await;
    let (_, timer) = call(&app, Method::GET, "/timer", None).await;
    assert_eq!(timer["remaining_seconds"], 1500);
}

#[tokio::test]
async fn timer_subject_choices() {
    let app = app();
    let (_, body) = call(&app, Method::GET, "/timer/subjects", None).await;
    assert_eq!(body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn dashboard_has_weekly_data() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weekly"].as_array().unwrap().len(), 7);
    assert_eq!(body["overview"][1]["progress_percent"], 72);
}

#[tokio::test]
async fn subjects_month_filter() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/subjects?month=last", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["month"], "last");
    assert_eq!(body["summary"]["total_hours"], 127);

    let (status, body) = call(&app, Method::GET, "/subjects?month=someday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn group_search_and_actions() {
    let app = app();
    let (_, body) = call(&app, Method::GET, "/groups?q=conversation", None).await;
    assert_eq!(body["my_groups"].as_array().unwrap().len(), 2);
    assert_eq!(body["available"].as_array().unwrap().len(), 1);
    assert_eq!(body["available"][0]["id"], 3);

    let (status, body) = call(&app, Method::POST, "/groups/2/join", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification"]["kind"], "group_join_requested");

    let (status, _) = call(&app, Method::POST, "/groups/1/join", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = call(&app, Method::POST, "/groups/42/leave", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(&app, Method::POST, "/groups/4/leave", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification"]["severity"], "destructive");

    let (_, notifications) = call(&app, Method::GET, "/notifications", None).await;
    assert_eq!(notifications.as_array().unwrap().len(), 2);
}
