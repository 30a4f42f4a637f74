//! tally-server
//!
//! - JSON API: `/` greeting, `/random` uniform integer in [1, 100]
//! - Ops: `/healthz` liveness, `/metrics` Prometheus text exposition
//! - Per-endpoint request counter, reset to zero on every process start

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use tally_server::{app_state, config, router};

const CONFIG_PATH: &str = "tally.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Strict parsing when the file is present; the routes themselves do not
    // depend on configuration, so an absent file falls back to defaults.
    let cfg = if std::path::Path::new(CONFIG_PATH).exists() {
        config::load_from_file(CONFIG_PATH).expect("config load failed")
    } else {
        tracing::warn!(path = CONFIG_PATH, "config file not found, using defaults");
        config::ServerConfig::default()
    };

    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
