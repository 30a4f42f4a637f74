//! Endpoint behavior tests, driving the handlers directly.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use tally_server::api;
use tally_server::app_state::AppState;
use tally_server::config::ServerConfig;
use tally_server::ops;

fn fresh_state() -> AppState {
    AppState::new(ServerConfig::default())
}

async fn body_string(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn greeting_counts_every_call() {
    let state = fresh_state();

    for _ in 0..5 {
        let Json(body) = api::root(State(state.clone())).await;
        assert_eq!(body["message"], "Hello, Tally!");
    }

    assert_eq!(state.metrics().request_count.get("/"), 5);
}

#[tokio::test]
async fn random_number_stays_in_range() {
    let state = fresh_state();

    for _ in 0..1000 {
        let Json(body) = api::random_number(State(state.clone())).await;
        let n = body["random_number"].as_u64().unwrap();
        assert!((1..=100u64).contains(&n), "out of range: {n}");
    }

    assert_eq!(state.metrics().request_count.get("/random"), 1000);
}

#[tokio::test]
async fn counters_are_independent_across_endpoints() {
    let state = fresh_state();

    api::root(State(state.clone())).await;
    api::random_number(State(state.clone())).await;
    api::root(State(state.clone())).await;
    api::random_number(State(state.clone())).await;
    api::root(State(state.clone())).await;

    assert_eq!(state.metrics().request_count.get("/"), 3);
    assert_eq!(state.metrics().request_count.get("/random"), 2);
}

#[tokio::test]
async fn metrics_scrape_is_read_only() {
    let state = fresh_state();
    api::root(State(state.clone())).await;

    let first = body_string(ops::metrics(State(state.clone())).await).await;
    let second = body_string(ops::metrics(State(state.clone())).await).await;

    assert_eq!(first, second);
    assert_eq!(state.metrics().request_count.get("/"), 1);
    assert_eq!(state.metrics().request_count.get("/metrics"), 0);
}

#[tokio::test]
async fn scrape_reports_per_endpoint_counts() {
    let state = fresh_state();

    api::root(State(state.clone())).await;
    api::root(State(state.clone())).await;
    api::random_number(State(state.clone())).await;

    let resp = ops::metrics(State(state.clone())).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));

    let body = body_string(resp).await;
    assert!(body.contains("# TYPE request_count counter"));
    assert!(body.contains(r#"request_count{endpoint="/"} 2"#));
    assert!(body.contains(r#"request_count{endpoint="/random"} 1"#));
    // The scrape endpoint never creates a series for itself.
    assert!(!body.contains("/metrics"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let resp = ops::healthz().await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}
