//! # Collection Client
//!
//! The cloneable handle used to talk to a [`CollectionActor`](crate::CollectionActor).

use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for one collection.
///
/// Holds only the request sender, so cloning is cheap and clones can be moved into
/// concurrently running tasks. Every method suspends until the actor answers.
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Document> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    /// Sends one request and waits for the reply.
    async fn call<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn insert(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.call(|respond_to| StoreRequest::Insert { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.call(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn find(&self, filter: T::Filter) -> Result<Vec<T>, StoreError> {
        self.call(|respond_to| StoreRequest::Find { filter, respond_to })
            .await
    }

    /// Every document in the collection, ascending by id.
    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        self.find(T::Filter::default()).await
    }

    pub async fn count(&self, filter: T::Filter) -> Result<u64, StoreError> {
        self.call(|respond_to| StoreRequest::Count { filter, respond_to })
            .await
    }

    pub async fn remove(&self, id: T::Id) -> Result<(), StoreError> {
        self.call(|respond_to| StoreRequest::Remove { id, respond_to })
            .await
    }
}
