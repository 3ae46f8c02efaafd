//! # Document Trait
//!
//! The `Document` trait is the contract every stored record type (Author, Book, Genre,
//! BookInstance, …) implements so that a generic [`CollectionActor`](crate::CollectionActor)
//! can own it. It names the id, the insert payload, the query filter, the injected context
//! and the error type, and offers two lifecycle hooks (`on_create`, `on_remove`).
//!
//! # Provided Methods (Hooks)
//! - [`Document::on_create`] runs after the record is built and before it is stored.
//! - [`Document::on_remove`] runs before the record leaves the collection.
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by a `CollectionActor`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can talk to other collections (e.g. a book checking
/// that its author exists). The `Context` value is handed to `run()`, not `new()`, so
/// collections can be wired to each other after they are all constructed.
#[async_trait]
pub trait Document: Clone + Debug + Send + Sync + 'static {
    /// Store-assigned identifier. Collections hand out `1, 2, 3, …` and keep records ordered
    /// by id, which makes `find` return documents in insertion order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for inserting a new record.
    type Create: Send + Sync + Debug;

    /// Query predicate used by `find` and `count`.
    /// `Default` must mean "match every document".
    type Filter: Default + Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` if there are none.
    type Context: Send + Sync;

    /// Error raised when a record is rejected (missing fields, dangling references, …).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from its assigned id and the insert payload.
    /// Field-level constraints belong here.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record satisfies `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Called after `from_create` succeeds and before the record is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the record is removed.
    async fn on_remove(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
