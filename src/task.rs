//! Task orchestration: the three-stage lifecycle driver
//!
//! A task runs preprocess → process → cleanup, in that fixed order, over a
//! list of opaque work items. The [`Task`] trait provides the whole lifecycle
//! as default method bodies; implementors supply a [`TaskConfig`] and override
//! only the hooks they care about, typically [`Task::seed_items`] to produce
//! the work list and [`Task::process_item`] to do the real work.
//!
//! A failing item halts the batch: the error is logged with whatever context
//! the stage accumulated and then propagated out of [`Task::start`]. Later
//! stages never run after a failure, and cleanup only ever sees items that
//! made it through the process stage.
//!
//! # Example
//!
//! ```
//! use batch_task::{ExecutionMode, Result, Task, TaskConfig, TracingLogSink};
//! use std::sync::Arc;
//!
//! struct ResizeTask {
//!     config: TaskConfig,
//!     assets: Vec<String>,
//! }
//!
//! #[async_trait::async_trait]
//! impl Task for ResizeTask {
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
//!         Ok(format!("{asset}.resized"))
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let task = ResizeTask {
//!     config: TaskConfig::new(
//!         "asset resize",
//!         ExecutionMode::FailFast,
//!         Some(Arc::new(TracingLogSink)),
//!     ),
//!     assets: vec!["banner.png".into(), "icon.png".into()],
//! };
//! task.start().await.unwrap();
//! # });
//! ```

use crate::error::{Error, Result};
use crate::processing::{process_concurrent, process_fail_fast};
use crate::sink::{LogLevel, LogSink};
use crate::types::{ExecutionMode, Stage};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Task type used when none is supplied
pub const DEFAULT_TASK_TYPE: &str = "batch task";

/// Configuration shared by every task: type name, execution mode, log sink
///
/// The task type is a plain string used only as logging context. The log sink
/// is an optional capability; without one the task logs nothing, but
/// [`Task::start`] refuses to run (see [`Task::validate`]).
#[derive(Clone)]
pub struct TaskConfig {
    task_type: String,
    mode: ExecutionMode,
    log_sink: Option<Arc<dyn LogSink>>,
}

impl TaskConfig {
    /// Create a configuration from its three parts
    pub fn new(
        task_type: impl Into<String>,
        mode: ExecutionMode,
        log_sink: Option<Arc<dyn LogSink>>,
    ) -> Self {
        Self {
            task_type: task_type.into(),
            mode,
            log_sink,
        }
    }

    /// Replace the task type
    #[must_use]
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    /// Replace the execution mode
    #[must_use]
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Attach a log sink
    #[must_use]
    pub fn with_log_sink(mut self, log_sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = Some(log_sink);
        self
    }

    /// Task type used as logging context
    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    /// Execution mode applied to the preprocess and process stages
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// The configured sink, if any
    pub fn log_sink(&self) -> Option<&dyn LogSink> {
        self.log_sink.as_deref()
    }
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            task_type: DEFAULT_TASK_TYPE.to_string(),
            mode: ExecutionMode::default(),
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for TaskConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskConfig")
            .field("task_type", &self.task_type)
            .field("mode", &self.mode)
            .field("log_sink", &self.log_sink.is_some())
            .finish()
    }
}

/// One batch-processing run: preprocess → process → cleanup
///
/// Every method except [`Task::config`] has a default body, so an implementor
/// overrides only what it needs. The per-item hooks default to logging
/// pass-throughs; the stage drivers and [`Task::start`] rarely need
/// overriding.
///
/// The engine never inspects item contents; `Item` only needs `Serialize` so
/// the default hooks can place it in structured log detail.
#[async_trait]
pub trait Task: Send + Sync {
    /// Work item flowing through the pipeline
    type Item: Serialize + Send + Sync + 'static;

    /// The task's configuration
    fn config(&self) -> &TaskConfig;

    /// Task type used as logging context
    fn task_type(&self) -> &str {
        self.config().task_type()
    }

    /// Execution mode applied to the preprocess and process stages
    fn mode(&self) -> ExecutionMode {
        self.config().mode()
    }

    /// Forward a log call to the configured sink; no-op without one
    async fn log(&self, level: LogLevel, message: &str, detail: Value) {
        if let Some(sink) = self.config().log_sink() {
            sink.log(level, message, detail).await;
        }
    }

    /// Check preconditions before any stage runs
    ///
    /// Fails when the task type is empty or no log sink is configured. A task
    /// that runs a batch without being able to report what happened to it is
    /// considered misconfigured.
    fn validate(&self) -> Result<()> {
        if self.task_type().is_empty() || self.config().log_sink().is_none() {
            return Err(Error::Config {
                message: "missing task type or log sink".to_string(),
            });
        }
        Ok(())
    }

    /// Seed hook: produce the initial item list for the preprocess stage
    ///
    /// Default returns an empty list. Overrides should keep the verbose log
    /// call so the observable sequence stays intact.
    async fn seed_items(&self) -> Result<Vec<Self::Item>> {
        self.log(
            LogLevel::Verbose,
            "seeding preprocess items",
            json!({ "type": self.task_type() }),
        )
        .await;
        Ok(Vec::new())
    }

    /// Per-item preprocess hook; default logs and passes the item through
    async fn preprocess_item(&self, item: Self::Item) -> Result<Self::Item> {
        self.log(
            LogLevel::Verbose,
            "preprocess item",
            json!({ "type": self.task_type(), "item": &item }),
        )
        .await;
        Ok(item)
    }

    /// Per-item process hook; default logs and passes the item through
    async fn process_item(&self, item: Self::Item) -> Result<Self::Item> {
        self.log(
            LogLevel::Verbose,
            "process item",
            json!({ "type": self.task_type(), "item": &item }),
        )
        .await;
        Ok(item)
    }

    /// Cleanup hook, invoked once with every item the process stage produced
    async fn cleanup_items(&self, items: Vec<Self::Item>) -> Result<Vec<Self::Item>> {
        self.log(
            LogLevel::Verbose,
            "cleanup items",
            json!({ "type": self.task_type(), "items": &items }),
        )
        .await;
        Ok(items)
    }

    /// Preprocess stage: seed the item list, then run the per-item hook over
    /// it with the configured execution mode
    ///
    /// On failure the accumulated error list is logged and the strategy's
    /// error is rethrown; the process stage never runs.
    async fn preprocess(&self) -> Result<Vec<Self::Item>> {
        let seeded = self.seed_items().await?;
        let mut errors = Vec::new();

        let outcome = match self.mode() {
            ExecutionMode::FailFast => {
                process_fail_fast(
                    seeded,
                    |task, item| task.preprocess_item(item),
                    self,
                    &mut errors,
                )
                .await
            }
            ExecutionMode::Concurrent => {
                process_concurrent(
                    seeded,
                    |task, item| task.preprocess_item(item),
                    self,
                    &mut errors,
                )
                .await
            }
        };

        match outcome {
            Ok(items) => Ok(items),
            Err(error) => {
                self.log(
                    LogLevel::Error,
                    "preprocess stage failed",
                    stage_failure_detail(self.task_type(), Stage::Preprocess, &errors),
                )
                .await;
                Err(error)
            }
        }
    }

    /// Process stage: run the per-item hook over the preprocessed items with
    /// the configured execution mode
    ///
    /// Same failure contract as [`Task::preprocess`]; cleanup never runs
    /// after a process failure.
    async fn process(&self, items: Vec<Self::Item>) -> Result<Vec<Self::Item>> {
        let mut errors = Vec::new();

        let outcome = match self.mode() {
            ExecutionMode::FailFast => {
                process_fail_fast(
                    items,
                    |task, item| task.process_item(item),
                    self,
                    &mut errors,
                )
                .await
            }
            ExecutionMode::Concurrent => {
                process_concurrent(
                    items,
                    |task, item| task.process_item(item),
                    self,
                    &mut errors,
                )
                .await
            }
        };

        match outcome {
            Ok(items) => Ok(items),
            Err(error) => {
                self.log(
                    LogLevel::Error,
                    "process stage failed",
                    stage_failure_detail(self.task_type(), Stage::Process, &errors),
                )
                .await;
                Err(error)
            }
        }
    }

    /// Cleanup stage: a single list-level hook call, not distributed per item
    async fn cleanup(&self, items: Vec<Self::Item>) -> Result<Vec<Self::Item>> {
        self.cleanup_items(items).await
    }

    /// Run the full lifecycle: validate, preprocess, process, cleanup
    ///
    /// The opening info log fires unconditionally, even when validation is
    /// about to fail. Any failure is reported through a final error-level log
    /// before it propagates; success is signaled by `Ok(())`.
    async fn start(&self) -> Result<()> {
        self.log(
            LogLevel::Info,
            "starting task",
            json!({ "type": self.task_type() }),
        )
        .await;

        let outcome: Result<()> = async {
            self.validate()?;

            self.log(
                LogLevel::Info,
                "preprocessing items before execution",
                json!({ "type": self.task_type() }),
            )
            .await;
            let preprocessed = self.preprocess().await?;

            self.log(
                LogLevel::Info,
                "starting process stage",
                json!({ "type": self.task_type(), "preprocessed": preprocessed.len() }),
            )
            .await;
            let processed = self.process(preprocessed).await?;

            self.log(
                LogLevel::Info,
                "cleaning up after process",
                json!({ "type": self.task_type(), "processed": processed.len() }),
            )
            .await;
            let cleaned = self.cleanup(processed).await?;

            self.log(
                LogLevel::Info,
                "task complete",
                json!({ "type": self.task_type(), "cleaned": cleaned.len() }),
            )
            .await;
            Ok(())
        }
        .await;

        if let Err(error) = &outcome {
            self.log(
                LogLevel::Error,
                "task failed",
                json!({ "type": self.task_type(), "error": error.to_string() }),
            )
            .await;
        }
        outcome
    }
}

fn stage_failure_detail(task_type: &str, stage: Stage, errors: &[Error]) -> Value {
    json!({
        "type": task_type,
        "stage": stage,
        "errors": errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}
