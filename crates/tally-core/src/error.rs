//! Shared error type across tally crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
///
/// Request handlers are infallible; everything here is a startup-time
/// failure (config read, parse, or semantic validation).
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}
