//! # Collection Messages
//!
//! The request type sent from a [`CollectionClient`](crate::CollectionClient) to its
//! [`CollectionActor`](crate::CollectionActor), and the one-shot reply channel alias.

use crate::document::Document;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by collections.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Message sent to a collection actor.
///
/// The variants mirror the operations a document database exposes for one collection:
///
/// - **Insert**: builds a record from [`Document::Create`], assigns an id, stores it.
/// - **Get**: fetches one record by id (`None` when absent).
/// - **Find**: every record matching a [`Document::Filter`], ordered by id.
/// - **Count**: number of records matching a filter.
/// - **Remove**: deletes one record by id.
#[derive(Debug)]
pub enum StoreRequest<T: Document> {
    Insert {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Count {
        filter: T::Filter,
        respond_to: Response<u64>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<()>,
    },
}
