//! Core types for batch-task

use serde::{Deserialize, Serialize};

/// How a collection of items is driven through a per-item operation
///
/// Both modes schedule cooperatively on the async runtime; they differ only
/// in fail-fast granularity, not in threading model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Await each item before dispatching the next; stop dispatching after
    /// the first failure. At most one error is recorded per run.
    FailFast,

    /// Dispatch every item up front and wait for all of them to settle.
    /// Every failed item records an error, even after a sibling has failed.
    #[default]
    Concurrent,
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionMode::FailFast => write!(f, "fail_fast"),
            ExecutionMode::Concurrent => write!(f, "concurrent"),
        }
    }
}

/// One of the three sequential phases of a task run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Seed items are prepared for execution
    Preprocess,
    /// Every preprocessed item is executed
    Process,
    /// Successful results are handed to the cleanup hook
    Cleanup,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Preprocess => write!(f, "preprocess"),
            Stage::Process => write!(f, "process"),
            Stage::Cleanup => write!(f, "cleanup"),
        }
    }
}
