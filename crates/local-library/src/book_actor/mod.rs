//! # Book Collection
//!
//! Books are the one record type with outgoing references: every book names an
//! [`Author`](crate::model::Author) and any number of [`Genre`](crate::model::Genre)s.
//!
//! - [`entity`] - [`Document`](catalog_store::Document) implementation for [`Book`]
//! - [`error`] - [`BookError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! The actor is started with `(AuthorClient, GenreClient)` as its context so that
//! `on_create` can refuse a book whose author or genres do not exist.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookClient;
use crate::model::Book;
use catalog_store::CollectionActor;

/// Creates a new Book collection actor and its client.
pub fn new(capacity: usize) -> (CollectionActor<Book>, BookClient) {
    let (actor, inner) = CollectionActor::new(capacity);
    (actor, BookClient::new(inner))
}
