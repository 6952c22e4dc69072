//! Shared helpers for batch-task integration tests

use async_trait::async_trait;
use batch_task::{Error, ExecutionMode, LogLevel, LogSink, Result, Task, TaskConfig};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One recorded log call
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub detail: Value,
}

/// Log sink that records every call for sequence assertions
#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything logged so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .expect("recording sink lock poisoned")
            .clone()
    }
}

#[async_trait]
impl LogSink for RecordingSink {
    async fn log(&self, level: LogLevel, message: &str, detail: Value) {
        self.entries
            .lock()
            .expect("recording sink lock poisoned")
            .push(LogEntry {
                level,
                message: message.to_string(),
                detail,
            });
    }
}

/// Which hook of [`MockTask`] fails
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailPoint {
    Seed,
    PreprocessItem,
    ProcessItem,
    Cleanup,
}

/// Snapshot of every hook invocation a [`MockTask`] observed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallReport {
    /// Items returned by the seed hook
    pub seeded: usize,
    /// Preprocess hook invocations (attempts, including the failing one)
    pub preprocessed: usize,
    /// Process hook invocations (attempts, including the failing one)
    pub processed: usize,
    /// Cleanup hook invocations
    pub cleanup_calls: usize,
    /// Length of the list the cleanup hook received
    pub cleanup_len: usize,
}

/// Instrumented task counting every hook invocation
///
/// Hooks emit the same verbose logs as the default implementations before
/// doing their bookkeeping, so this task can also back log-sequence tests.
pub struct MockTask {
    config: TaskConfig,
    items: Vec<String>,
    fail: Option<FailPoint>,
    seeded: AtomicUsize,
    preprocess_calls: AtomicUsize,
    process_calls: AtomicUsize,
    cleanup_calls: AtomicUsize,
    cleanup_len: AtomicUsize,
}

impl MockTask {
    pub fn new(mode: ExecutionMode, sink: Option<Arc<dyn LogSink>>) -> Self {
        Self::with_items(mode, sink, Vec::new())
    }

    pub fn with_items(
        mode: ExecutionMode,
        sink: Option<Arc<dyn LogSink>>,
        items: Vec<String>,
    ) -> Self {
        Self::with_config(TaskConfig::new("mock task", mode, sink), items)
    }

    /// Full control over the configuration, for validation scenarios
    pub fn with_config(config: TaskConfig, items: Vec<String>) -> Self {
        Self {
            config,
            items,
            fail: None,
            seeded: AtomicUsize::new(0),
            preprocess_calls: AtomicUsize::new(0),
            process_calls: AtomicUsize::new(0),
            cleanup_calls: AtomicUsize::new(0),
            cleanup_len: AtomicUsize::new(0),
        }
    }

    pub fn failing_at(mut self, point: FailPoint) -> Self {
        self.fail = Some(point);
        self
    }

    pub fn report(&self) -> CallReport {
        CallReport {
            seeded: self.seeded.load(Ordering::SeqCst),
            preprocessed: self.preprocess_calls.load(Ordering::SeqCst),
            processed: self.process_calls.load(Ordering::SeqCst),
            cleanup_calls: self.cleanup_calls.load(Ordering::SeqCst),
            cleanup_len: self.cleanup_len.load(Ordering::SeqCst),
        }
    }

    fn fail_if(&self, point: FailPoint) -> Result<()> {
        if self.fail == Some(point) {
            return Err(Error::handler("injected failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl Task for MockTask {
    type Item = String;

    fn config(&self) -> &TaskConfig {
        &self.config
    }

    async fn seed_items(&self) -> Result<Vec<String>> {
        self.log(
            LogLevel::Verbose,
            "seeding preprocess items",
            json!({ "type": self.task_type() }),
        )
        .await;
        self.seeded.store(self.items.len(), Ordering::SeqCst);
        self.fail_if(FailPoint::Seed)?;
        Ok(self.items.clone())
    }

    async fn preprocess_item(&self, item: String) -> Result<String> {
        self.log(
            LogLevel::Verbose,
            "preprocess item",
            json!({ "type": self.task_type(), "item": &item }),
        )
        .await;
        self.preprocess_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if(FailPoint::PreprocessItem)?;
        Ok(item)
    }

    async fn process_item(&self, item: String) -> Result<String> {
        self.log(
            LogLevel::Verbose,
            "process item",
            json!({ "type": self.task_type(), "item": &item }),
        )
        .await;
        self.process_calls.fetch_add(1, Ordering::SeqCst);
        self.fail_if(FailPoint::ProcessItem)?;
        Ok(item)
    }

    async fn cleanup_items(&self, items: Vec<String>) -> Result<Vec<String>> {
        self.log(
            LogLevel::Verbose,
            "cleanup items",
            json!({ "type": self.task_type(), "items": &items }),
        )
        .await;
        self.cleanup_calls.fetch_add(1, Ordering::SeqCst);
        self.cleanup_len.store(items.len(), Ordering::SeqCst);
        self.fail_if(FailPoint::Cleanup)?;
        Ok(items)
    }
}

/// Two work items, the shape most lifecycle scenarios use
pub fn two_items() -> Vec<String> {
    vec!["item-1".to_string(), "item-2".to_string()]
}
