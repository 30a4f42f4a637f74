//! Lightweight in-process metrics (dependency-free).
//!
//! Counters are stored as atomics in `tally-core` and rendered by the
//! `/metrics` handler; no exporter or push machinery exists.

pub mod metrics;
