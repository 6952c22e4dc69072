//! Error types for batch-task
//!
//! The engine deliberately keeps its error surface small: a configuration
//! error raised before any stage runs, a handler error carrying whatever a
//! seed, per-item, or cleanup hook reported, and a general-purpose escape
//! hatch. Every variant owns its payload as a `String`, which keeps the enum
//! `Clone` so a failure can be both recorded in an error accumulator and
//! surfaced to the caller.

use thiserror::Error;

/// Result type alias for batch-task operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for batch-task
///
/// Hooks return this type; the engine never swallows an error, it only adds
/// logging context while propagating it out of
/// [`Task::start`](crate::Task::start).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Task configuration is invalid (empty type or missing log sink)
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the invalid configuration
        message: String,
    },

    /// A seed, per-item, or cleanup hook failed
    #[error("handler error: {0}")]
    Handler(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Convenience constructor for hook failures
    pub fn handler(message: impl Into<String>) -> Self {
        Error::Handler(message.into())
    }
}
