//! # batch-task
//!
//! Reusable three-stage task execution engine for batch processing pipelines.
//!
//! ## Design Philosophy
//!
//! batch-task is designed to be:
//! - **Lifecycle-first** - One fixed preprocess → process → cleanup sequence,
//!   with failure semantics you can reason about
//! - **Override only what you need** - Every hook has a sensible default body
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Observable** - Stage transitions and failures flow through an injected
//!   log sink, never a global logger
//!
//! A task runs a variable-length list of opaque work items through pluggable
//! per-stage handlers. Any single item's failure halts the batch while
//! reporting exactly what succeeded so far; how eagerly the batch halts is
//! chosen per run via [`ExecutionMode`].
//!
//! ## Quick Start
//!
//! ```
//! use batch_task::{ExecutionMode, Result, Task, TaskConfig, TracingLogSink};
//! use std::sync::Arc;
//!
//! struct ThumbnailTask {
//!     config: TaskConfig,
//!     assets: Vec<String>,
//! }
//!
//! #[async_trait::async_trait]
//! impl Task for ThumbnailTask {
//!     type Item = String;
//!
//!     fn config(&self) -> &TaskConfig {
//!         &self.config
//!     }
//!
//!     async fn seed_items(&self) -> Result<Vec<String>> {
//!         Ok(self.assets.clone())
//!     }
//!
//!     async fn process_item(&self, asset: String) -> Result<String> {
//!         Ok(format!("{asset}.thumb"))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let task = ThumbnailTask {
//!         config: TaskConfig::new(
//!             "thumbnail generation",
//!             ExecutionMode::FailFast,
//!             Some(Arc::new(TracingLogSink)),
//!         ),
//!         assets: vec!["banner.png".into(), "icon.png".into()],
//!     };
//!     task.start().await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Error types
pub mod error;
/// Collection processing strategies
pub mod processing;
/// Log sink capability
pub mod sink;
/// Task lifecycle orchestration
pub mod task;
/// Core types
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use processing::{process_concurrent, process_fail_fast};
pub use sink::{LogLevel, LogSink, TracingLogSink};
pub use task::{DEFAULT_TASK_TYPE, Task, TaskConfig};
pub use types::{ExecutionMode, Stage};
