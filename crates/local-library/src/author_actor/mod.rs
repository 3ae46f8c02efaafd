//! Author collection: record rules and factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AuthorClient;
use crate::model::Author;
use catalog_store::CollectionActor;

/// Creates a new Author collection actor and its client.
pub fn new(capacity: usize) -> (CollectionActor<Author>, AuthorClient) {
    let (actor, inner) = CollectionActor::new(capacity);
    (actor, AuthorClient::new(inner))
}
