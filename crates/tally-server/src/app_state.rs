//! Shared application state for the tally server.
//!
//! The metric registry is owned here and handed to handlers through axum
//! state extraction; nothing reaches it through a global.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::obs::metrics::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build application state with a fresh registry (all counters at 0).
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }
}
