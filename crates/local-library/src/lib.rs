//! # Local Library
//!
//! A library catalog (books, authors, genres and the physical copies of books) served
//! over HTTP, backed by the actor-based [`catalog_store`].
//!
//! ## Layers
//!
//! - **[model]**: record types, filters and the populated read models.
//! - **`*_actor`**: one [`Document`](catalog_store::Document) implementation and error type
//!   per collection, plus a factory for its actor.
//! - **[clients]**: typed clients and the [`Catalog`](clients::Catalog) handle.
//! - **[aggregate]**: concurrent fan-out of named reads with first-error-wins joining.
//! - **[controller]**: the catalog actions, producing views, redirects or text.
//! - **[http]**: the `axum` router, view rendering and the error handler.
//! - **[lifecycle]**: starting and stopping the collections, tracing, sample data.
//! - **[config]**: environment configuration.

pub mod aggregate;
pub mod author_actor;
pub mod book_actor;
pub mod book_instance_actor;
pub mod clients;
pub mod config;
pub mod controller;
pub mod error;
pub mod genre_actor;
pub mod http;
pub mod lifecycle;
pub mod model;
