//! Collection processing strategies
//!
//! This module provides the two standalone strategies for driving a list of
//! items through a per-item async operation. Both dispatch in input order and
//! schedule cooperatively; they differ in fail-fast granularity:
//!
//! - [`process_fail_fast`] awaits each item before dispatching the next and
//!   stops at the first failure, recording exactly one error.
//! - [`process_concurrent`] dispatches every item up front and waits for all
//!   of them to settle, recording one error per failed item.
//!
//! The strategies are plain generic functions, usable with or without a
//! [`Task`](crate::Task) driving them.
//!
//! # Example
//!
//! ```
//! use batch_task::{Error, process_concurrent};
//!
//! # tokio_test::block_on(async {
//! let mut errors: Vec<Error> = Vec::new();
//! let doubled = process_concurrent(
//!     vec![1, 2, 3],
//!     |factor: u32, item: u32| async move { Ok::<_, Error>(item * factor) },
//!     2,
//!     &mut errors,
//! )
//! .await;
//!
//! assert_eq!(doubled, Ok(vec![2, 4, 6]));
//! assert!(errors.is_empty());
//! # });
//! ```

use futures::future::join_all;
use std::fmt::Display;
use std::future::Future;

/// Drive items through an operation one at a time, halting at the first failure
///
/// Items are dispatched in input order and each one is awaited before the next
/// is started. On the first failure the error is appended to `errors`, no
/// further item is dispatched, and the same error is returned; results from
/// items that succeeded before the failure are dropped with the failing
/// return. An empty `items` list resolves immediately to an empty result list
/// without invoking the operation or touching `errors`.
///
/// # Arguments
///
/// * `items` - Work items, consumed in order
/// * `operation` - Per-item async operation, invoked as `operation(context, item)`
/// * `context` - Copied into every invocation (typically a `&Task` reference)
/// * `errors` - Accumulator receiving at most one error for this run
///
/// # Example
///
/// ```
/// use batch_task::{Error, process_fail_fast};
///
/// # tokio_test::block_on(async {
/// let mut errors: Vec<Error> = Vec::new();
/// let outcome = process_fail_fast(
///     vec!["a", "bad", "c"],
///     |_ctx: (), item: &str| async move {
///         if item == "bad" {
///             Err(Error::handler("unreadable asset"))
///         } else {
///             Ok(item.to_uppercase())
///         }
///     },
///     (),
///     &mut errors,
/// )
/// .await;
///
/// // "c" was never dispatched, and exactly one error was recorded.
/// assert!(outcome.is_err());
/// assert_eq!(errors.len(), 1);
/// # });
/// ```
pub async fn process_fail_fast<C, I, T, E, F, Fut>(
    items: Vec<I>,
    operation: F,
    context: C,
    errors: &mut Vec<E>,
) -> Result<Vec<T>, E>
where
    C: Copy,
    E: Clone + Display,
    F: Fn(C, I) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut results = Vec::with_capacity(items.len());

    for item in items {
        match operation(context, item).await {
            Ok(processed) => results.push(processed),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    completed = results.len(),
                    "item operation failed, halting dispatch"
                );
                errors.push(error.clone());
                return Err(error);
            }
        }
    }

    Ok(results)
}

/// Drive every item through an operation concurrently and wait for all to settle
///
/// One future is created per item, in input order, and all of them are joined;
/// a failing item does not stop its siblings from running to completion. Every
/// failure is appended to `errors` in input-index order and one of them (the
/// first by index) is returned; when every item succeeds the result list
/// matches the input order regardless of completion order. An empty `items`
/// list resolves immediately to an empty result list without invoking the
/// operation or touching `errors`.
///
/// # Arguments
///
/// * `items` - Work items, consumed in order
/// * `operation` - Per-item async operation, invoked as `operation(context, item)`
/// * `context` - Copied into every invocation (typically a `&Task` reference)
/// * `errors` - Accumulator receiving one error per failed item
///
/// # Example
///
/// ```
/// use batch_task::{Error, process_concurrent};
///
/// # tokio_test::block_on(async {
/// let mut errors: Vec<Error> = Vec::new();
/// let outcome = process_concurrent(
///     vec![1, 2, 3],
///     |_ctx: (), item: u32| async move {
///         if item % 2 == 1 {
///             Err(Error::handler(format!("item {item} failed")))
///         } else {
///             Ok(item)
///         }
///     },
///     (),
///     &mut errors,
/// )
/// .await;
///
/// // All three items were dispatched; both odd items recorded an error.
/// assert!(outcome.is_err());
/// assert_eq!(errors.len(), 2);
/// # });
/// ```
pub async fn process_concurrent<C, I, T, E, F, Fut>(
    items: Vec<I>,
    operation: F,
    context: C,
    errors: &mut Vec<E>,
) -> Result<Vec<T>, E>
where
    C: Copy,
    E: Clone + Display,
    F: Fn(C, I) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let pending: Vec<Fut> = items
        .into_iter()
        .map(|item| operation(context, item))
        .collect();
    let settled = join_all(pending).await;

    let mut results = Vec::with_capacity(settled.len());
    let mut first_error = None;

    for (index, outcome) in settled.into_iter().enumerate() {
        match outcome {
            Ok(processed) => results.push(processed),
            Err(error) => {
                tracing::warn!(error = %error, index, "item operation failed");
                if first_error.is_none() {
                    first_error = Some(error.clone());
                }
                errors.push(error);
            }
        }
    }

    match first_error {
        Some(error) => Err(error),
        None => Ok(results),
    }
}
