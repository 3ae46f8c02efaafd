//! # Catalog Store
//!
//! An in-process document store built from actors. Every collection (authors, books, …) is
//! a [`CollectionActor`] running in its own Tokio task and owning its records outright; the
//! rest of the program talks to it through a cheap, cloneable [`CollectionClient`].
//!
//! ## Layers
//!
//! 1. **Record layer** ([`Document`]): what a record is, how it is built from an insert
//!    payload, how it matches a filter, and which hooks run on insert and removal.
//! 2. **Runtime layer** ([`CollectionActor`]): message loop, id assignment, sequential
//!    processing of inserts, reads, counts and removals.
//! 3. **Interface layer** ([`CollectionClient`], [`DocumentClient`]): async, typed calls.
//!
//! ## Concurrency Model
//!
//! - Each collection processes its requests one at a time, so records need no locks.
//! - Different collections run in parallel.
//! - Callers may issue many requests at once (e.g. several counts for a dashboard); they
//!   are queued and answered in arrival order.
//! - There is no cancellation: a request that reached the actor is always carried out,
//!   even if the caller stopped waiting for the answer.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`CollectionActor::run`], not to `new()`. A collection whose
//! records reference other collections (books referencing authors) receives those clients
//! as its context and can check the references in [`Document::on_create`].
//!
//! ## Testing
//!
//! [`mock::MockCollection`] answers a real client from canned expectations, so code built on
//! top of a client can be tested without running actors. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::DocumentClient;
pub use document::Document;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
