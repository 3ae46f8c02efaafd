//! Genre collection: record rules and factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::GenreClient;
use crate::model::Genre;
use catalog_store::CollectionActor;

/// Creates a new Genre collection actor and its client.
pub fn new(capacity: usize) -> (CollectionActor<Genre>, GenreClient) {
    let (actor, inner) = CollectionActor::new(capacity);
    (actor, GenreClient::new(inner))
}
