//! # Query Aggregation
//!
//! Fans a fixed set of named reads out concurrently and joins them into one keyed result.
//!
//! ```rust
//! use local_library::aggregate::Aggregation;
//!
//! #[tokio::main]
//! async fn main() {
//!     let results = Aggregation::<u64, String>::new()
//!         .branch("one", async { Ok(1) })
//!         .branch("two", async { Ok(2) })
//!         .join()
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(results.get("two"), Some(&2));
//! }
//! ```
//!
//! ## Contract
//!
//! - Every branch is spawned before any of them is awaited; there is no ordering
//!   between branches.
//! - [`Aggregation::join`] resolves once: with every branch's value when all succeed, or
//!   with the first error to occur. A result is never partially populated.
//! - After the first error the remaining branches are detached, not aborted. Store
//!   operations already in flight run to completion and their results are dropped.
//! - A branch that never completes keeps the aggregation pending; bounding the reads is
//!   the caller's job.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Why an aggregation did not produce a result.
#[derive(Debug, Error)]
pub enum AggregateError<E> {
    /// The first branch to fail, with its error.
    #[error("branch `{name}` failed: {source}")]
    Branch {
        name: String,
        #[source]
        source: E,
    },

    #[error("branch `{name}` panicked")]
    Panicked { name: String },

    /// Two branches were registered under the same name. Nothing was started.
    #[error("duplicate branch name `{0}`")]
    DuplicateBranch(String),
}

/// Named branch values of a successful aggregation.
#[derive(Debug)]
pub struct AggregationResult<V> {
    values: HashMap<String, V>,
}

impl<V> AggregationResult<V> {
    pub fn get(&self, name: &str) -> Option<&V> {
        self.values.get(name)
    }

    /// Moves a value out of the result.
    pub fn take(&mut self, name: &str) -> Option<V> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names still present, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// A set of named, independent reads waiting to be joined.
pub struct Aggregation<V, E> {
    branches: Vec<(String, BoxFuture<'static, Result<V, E>>)>,
}

impl<V, E> Default for Aggregation<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Aggregation<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    pub fn new() -> Self {
        Self {
            branches: Vec::new(),
        }
    }

    /// Registers a read under `name`. Nothing runs until [`join`](Self::join).
    pub fn branch<F>(mut self, name: impl Into<String>, read: F) -> Self
    where
        F: Future<Output = Result<V, E>> + Send + 'static,
    {
        self.branches.push((name.into(), read.boxed()));
        self
    }

    /// Runs every branch concurrently and waits for all of them or the first error.
    pub async fn join(self) -> Result<AggregationResult<V>, AggregateError<E>> {
        let mut seen = HashSet::new();
        for (name, _) in &self.branches {
            if !seen.insert(name.as_str()) {
                return Err(AggregateError::DuplicateBranch(name.clone()));
            }
        }

        let expected = self.branches.len();
        let mut tasks = JoinSet::new();
        let mut names = HashMap::with_capacity(expected);
        for (name, read) in self.branches {
            let handle = tasks.spawn(read);
            names.insert(handle.id(), name);
        }
        debug!(branches = expected, "Aggregation started");

        let mut values = HashMap::with_capacity(expected);
        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((id, Ok(value))) => {
                    let name = names.remove(&id).unwrap_or_default();
                    values.insert(name, value);
                }
                Ok((id, Err(source))) => {
                    let name = names.remove(&id).unwrap_or_default();
                    debug!(branch = %name, outstanding = tasks.len(), "Aggregation failed");
                    tasks.detach_all();
                    return Err(AggregateError::Branch { name, source });
                }
                Err(join_error) => {
                    let name = names.remove(&join_error.id()).unwrap_or_default();
                    warn!(branch = %name, "Aggregation branch panicked");
                    tasks.detach_all();
                    return Err(AggregateError::Panicked { name });
                }
            }
        }

        Ok(AggregationResult { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_aggregation_resolves_immediately() {
        let results = Aggregation::<u8, String>::new().join().await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_name_starts_nothing() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<()>();
        let tx2 = tx.clone();
        let result = Aggregation::<(), String>::new()
            .branch("count", async move {
                let _ = tx.send(());
                Ok(())
            })
            .branch("count", async move {
                let _ = tx2.send(());
                Ok(())
            })
            .join()
            .await;

        assert!(matches!(result, Err(AggregateError::DuplicateBranch(name)) if name == "count"));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_take_moves_value_out() {
        let mut results = Aggregation::<String, String>::new()
            .branch("title", async { Ok("Dune".to_string()) })
            .join()
            .await
            .unwrap();

        assert_eq!(results.take("title").as_deref(), Some("Dune"));
        assert!(results.take("title").is_none());
        assert_eq!(results.len(), 0);
    }
}
