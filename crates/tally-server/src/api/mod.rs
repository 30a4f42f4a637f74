//! JSON API endpoints.
//!
//! - `/`       : greeting
//! - `/random` : uniform integer in [1, 100]
//!
//! Each handler bumps the request counter for its own endpoint before
//! building the response. Neither handler takes input or can fail.

use axum::{extract::State, Json};
use rand::Rng;
use serde_json::{json, Value};

use crate::app_state::AppState;

pub async fn root(State(state): State<AppState>) -> Json<Value> {
    state.metrics().request_count.inc("/");
    Json(json!({ "message": "Hello, Tally!" }))
}

pub async fn random_number(State(state): State<AppState>) -> Json<Value> {
    state.metrics().request_count.inc("/random");

    let n: u32 = rand::thread_rng().gen_range(1..=100);
    Json(json!({ "random_number": n }))
}
