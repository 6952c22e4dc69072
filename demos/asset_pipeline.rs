//! Asset pipeline example
//!
//! This example demonstrates the core functionality of batch-task:
//! - Implementing the `Task` trait for a concrete batch job
//! - Seeding work items and transforming them per stage
//! - Injecting a log sink (here: a plain closure printing to stdout)
//! - Choosing between fail-fast and concurrent execution

use batch_task::{ExecutionMode, LogLevel, Result, Task, TaskConfig};
use serde_json::Value;
use std::sync::Arc;

/// Renders thumbnails for a list of image assets
struct ThumbnailTask {
    config: TaskConfig,
    assets: Vec<String>,
}

#[async_trait::async_trait]
impl Task for ThumbnailTask {
    type Item = String;

    fn config(&self) -> &TaskConfig {
        &self.config
    }

    async fn seed_items(&self) -> Result<Vec<String>> {
        Ok(self.assets.clone())
    }

    async fn preprocess_item(&self, asset: String) -> Result<String> {
        // Normalize file names before the heavy work starts.
        Ok(asset.to_lowercase())
    }

    async fn process_item(&self, asset: String) -> Result<String> {
        // A real task would decode and resize here.
        Ok(format!("{asset}.thumb"))
    }

    async fn cleanup_items(&self, thumbs: Vec<String>) -> Result<Vec<String>> {
        println!("✓ Rendered {} thumbnail(s): {:?}", thumbs.len(), thumbs);
        Ok(thumbs)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Any closure with the right shape works as a sink.
    let sink = Arc::new(|level: LogLevel, message: &str, detail: Value| {
        println!("[{level}] {message} {detail}");
    });

    let task = ThumbnailTask {
        config: TaskConfig::new("thumbnail generation", ExecutionMode::FailFast, Some(sink)),
        assets: vec![
            "Banner.PNG".to_string(),
            "Icon.png".to_string(),
            "Hero.JPG".to_string(),
        ],
    };

    task.start().await
}
