//! BookInstance collection: physical copies, each tied to a [`Book`](crate::model::Book).
//!
//! Started with a [`BookClient`](crate::clients::BookClient) as context; a copy of a
//! book that does not exist is refused.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookInstanceClient;
use crate::model::BookInstance;
use catalog_store::CollectionActor;

/// Creates a new BookInstance collection actor and its client.
pub fn new(capacity: usize) -> (CollectionActor<BookInstance>, BookInstanceClient) {
    let (actor, inner) = CollectionActor::new(capacity);
    (actor, BookInstanceClient::new(inner))
}
