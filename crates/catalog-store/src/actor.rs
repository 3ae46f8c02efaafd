//! # Collection Actor
//!
//! `CollectionActor<T>` is the server half of a collection. It owns the records of one
//! document type and processes [`StoreRequest`]s one at a time, so the map needs no lock.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns one collection of documents.
///
/// Each actor runs in its own Tokio task. Requests from every client are queued on one
/// channel and handled sequentially, which is the only write isolation the collection needs.
///
/// # Usage Pattern
///
/// 1. **Create**: `CollectionActor::new()` returns the actor and a cloneable client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use catalog_store::{CollectionActor, Document};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug, thiserror::Error)] #[error("bad note")] struct NoteError;
///
/// #[async_trait]
/// impl Document for Note {
///     type Id = u32;
///     type Create = String;
///     type Filter = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create(id: u32, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, notes) = CollectionActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = notes.insert("hello".into()).await.unwrap();
///     assert_eq!(notes.count(()).await.unwrap(), 1);
///     assert_eq!(notes.get(id).await.unwrap().unwrap().text, "hello");
/// }
/// ```
///
/// # Operations
///
/// * **Insert**: assigns `next_id`, calls `T::from_create`, then the `on_create` hook, then stores.
///   After id `u32::MAX` every insert answers `StoreError::Exhausted`.
/// * **Get**: clone of the record, or `None`.
/// * **Find**: clones of all matching records, ascending by id.
/// * **Count**: number of matching records.
/// * **Remove**: `on_remove` hook, then deletion. Unknown ids answer `StoreError::NotFound`.
pub struct CollectionActor<T: Document> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: BTreeMap<T::Id, T>,
    /// `None` once `u32::MAX` has been handed out.
    next_id: Option<u32>,
}

impl<T: Document> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls
    /// wait for space.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: BTreeMap::new(),
            next_id: Some(1),
        };
        (actor, CollectionClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to the `on_create` and `on_remove` hooks of every record.
    pub async fn run(mut self, context: T::Context) {
        // "Book" instead of "local_library::model::book::Book"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { params, respond_to } => {
                    debug!(entity_type, ?params, "Insert");
                    let Some(next_id) = self.next_id else {
                        warn!(entity_type, "Insert rejected, ids exhausted");
                        let _ = respond_to.send(Err(StoreError::Exhausted));
                        continue;
                    };
                    let id = T::Id::from(next_id);
                    self.next_id = next_id.checked_add(1);

                    let mut record = match T::from_create(id.clone(), params) {
                        Ok(record) => record,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Insert rejected");
                            let _ = respond_to.send(Err(StoreError::rejected(e)));
                            continue;
                        }
                    };
                    if let Err(e) = record.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(StoreError::rejected(e)));
                        continue;
                    }
                    self.records.insert(id.clone(), record);
                    info!(entity_type, %id, size = self.records.len(), "Inserted");
                    let _ = respond_to.send(Ok(id));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(entity_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Find { filter, respond_to } => {
                    let found: Vec<T> = self
                        .records
                        .values()
                        .filter(|record| record.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, hits = found.len(), "Find");
                    let _ = respond_to.send(Ok(found));
                }
                StoreRequest::Count { filter, respond_to } => {
                    let count = self
                        .records
                        .values()
                        .filter(|record| record.matches(&filter))
                        .count() as u64;
                    debug!(entity_type, ?filter, count, "Count");
                    let _ = respond_to.send(Ok(count));
                }
                StoreRequest::Remove { id, respond_to } => {
                    debug!(entity_type, %id, "Remove");
                    let Some(record) = self.records.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = record.on_remove(&context).await {
                        warn!(entity_type, %id, error = %e, "on_remove failed");
                        let _ = respond_to.send(Err(StoreError::rejected(e)));
                        continue;
                    }
                    self.records.remove(&id);
                    info!(entity_type, %id, size = self.records.len(), "Removed");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug)]
    struct Tag {
        id: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tag error")]
    struct TagError;

    #[async_trait]
    impl Document for Tag {
        type Id = u32;
        type Create = ();
        type Filter = ();
        type Context = ();
        type Error = TagError;

        fn from_create(id: u32, _: ()) -> Result<Self, TagError> {
            Ok(Self { id })
        }

        fn matches(&self, _: &()) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_last_id_is_issued_then_inserts_are_refused() {
        let (mut actor, tags) = CollectionActor::<Tag>::new(4);
        actor.next_id = Some(u32::MAX);
        tokio::spawn(actor.run(()));

        assert_eq!(tags.insert(()).await.unwrap(), u32::MAX);
        assert!(matches!(tags.insert(()).await, Err(StoreError::Exhausted)));
        assert_eq!(tags.count(()).await.unwrap(), 1);
        assert_eq!(tags.get(u32::MAX).await.unwrap().unwrap().id, u32::MAX);
    }
}
