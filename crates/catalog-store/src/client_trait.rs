//! # DocumentClient Trait
//!
//! Common interface for collection-specific clients: implement `inner()` and `map_error()`
//! and the standard reads and removal come for free, already mapped to the collection's
//! own error type.
use crate::{CollectionClient, Document, StoreError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard store operations.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use catalog_store::{CollectionClient, Document, DocumentClient, StoreError};
///
/// #[derive(Clone, Debug)] struct Note { id: u32 }
/// #[derive(Debug, thiserror::Error)] #[error("note: {0}")] struct NoteError(String);
///
/// #[async_trait]
/// impl Document for Note {
///     type Id = u32; type Create = (); type Filter = (); type Context = (); type Error = NoteError;
///     fn from_create(id: u32, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// struct NoteClient { inner: CollectionClient<Note> }
///
/// impl DocumentClient<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &CollectionClient<Note> { &self.inner }
///     fn map_error(e: StoreError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(notes: NoteClient) {
///     // get(), find(), count() and remove() are provided
///     let _ = notes.get(1).await;
///     let _ = notes.count(()).await;
/// }
/// ```
#[async_trait]
pub trait DocumentClient<T: Document>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic `CollectionClient`.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map store errors to the collection-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every document matching `filter`, ascending by id.
    #[tracing::instrument(skip(self))]
    async fn find(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(filter).await.map_err(Self::map_error)
    }

    /// Count documents matching `filter`.
    #[tracing::instrument(skip(self))]
    async fn count(&self, filter: T::Filter) -> Result<u64, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count(filter).await.map_err(Self::map_error)
    }

    /// Remove a document by id.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(id).await.map_err(Self::map_error)
    }
}
