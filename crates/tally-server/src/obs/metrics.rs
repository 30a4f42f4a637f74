//! Process-wide metric registry for the server.
//!
//! One `CounterVec` field per metric name; the name, help text, and label
//! key are spelled at the render call site. Adding a metric is one field
//! plus one render line.

use tally_core::metrics::CounterVec;

#[derive(Default)]
pub struct ServerMetrics {
    /// Requests per endpoint, counted by the endpoint's own handler.
    pub request_count: CounterVec,
}

impl ServerMetrics {
    /// Render all registered metrics in Prometheus text format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.request_count.render(
            "request_count",
            "Total number of requests",
            "endpoint",
            &mut out,
        );
        out
    }
}
