//! Log sink capability consumed by the task engine
//!
//! The engine never owns a logger. Callers inject a [`LogSink`] and the
//! engine reports stage transitions and failures through it; a task without
//! a sink simply logs nothing. Implementations can forward to `tracing`
//! ([`TracingLogSink`]), record entries for assertions, or bridge into any
//! host application's logging. Plain closures work too via the blanket
//! implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of an engine log call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Stage transitions and completion reports
    Info,
    /// Per-item and per-hook chatter
    Verbose,
    /// Stage and task failures
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "info"),
            LogLevel::Verbose => write!(f, "verbose"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Receiver for structured engine log calls
///
/// The engine awaits every call, so sinks may perform I/O. Detail is always
/// a JSON object carrying at least the task type.
///
/// # Examples
///
/// ```
/// use batch_task::{LogLevel, LogSink};
/// use serde_json::Value;
///
/// struct StdoutSink;
///
/// #[async_trait::async_trait]
/// impl LogSink for StdoutSink {
///     async fn log(&self, level: LogLevel, message: &str, detail: Value) {
///         println!("[{level}] {message} {detail}");
///     }
/// }
/// ```
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Record one engine log call
    async fn log(&self, level: LogLevel, message: &str, detail: Value);
}

/// Any matching closure is usable as a sink directly
#[async_trait]
impl<F> LogSink for F
where
    F: Fn(LogLevel, &str, Value) + Send + Sync,
{
    async fn log(&self, level: LogLevel, message: &str, detail: Value) {
        self(level, message, detail);
    }
}

/// Sink that forwards engine logs to the `tracing` ecosystem
///
/// Info maps to `tracing::info!`, verbose to `tracing::debug!`, and error to
/// `tracing::error!`; the structured detail is attached as a field. This is
/// the sink to reach for when the host application already has a tracing
/// subscriber installed.
///
/// # Examples
///
/// ```
/// use batch_task::{TaskConfig, TracingLogSink};
/// use std::sync::Arc;
///
/// let config = TaskConfig::default()
///     .with_task_type("thumbnail generation")
///     .with_log_sink(Arc::new(TracingLogSink));
/// assert!(config.log_sink().is_some());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogSink;

#[async_trait]
impl LogSink for TracingLogSink {
    async fn log(&self, level: LogLevel, message: &str, detail: Value) {
        match level {
            LogLevel::Info => tracing::info!(detail = %detail, "{}", message),
            LogLevel::Verbose => tracing::debug!(detail = %detail, "{}", message),
            LogLevel::Error => tracing::error!(detail = %detail, "{}", message),
        }
    }
}
