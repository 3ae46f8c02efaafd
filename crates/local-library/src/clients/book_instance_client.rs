//! # BookInstance Client
//!
//! Besides the standard reads, exposes the two queries the catalog runs most: copies of
//! one book and copies in a given state.
use crate::book_instance_actor::BookInstanceError;
use crate::model::{
    BookId, BookInstance, BookInstanceCreate, BookInstanceFilter, BookInstanceId,
    BookInstanceStatus,
};
use async_trait::async_trait;
use catalog_store::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, instrument};

/// Client for the BookInstance collection.
#[derive(Clone)]
pub struct BookInstanceClient {
    inner: CollectionClient<BookInstance>,
}

impl BookInstanceClient {
    pub fn new(inner: CollectionClient<BookInstance>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_book_instance(
        &self,
        params: BookInstanceCreate,
    ) -> Result<BookInstanceId, BookInstanceError> {
        debug!("Sending request");
        self.inner.insert(params).await.map_err(Self::map_error)
    }

    /// All copies of `book`, ascending by id.
    #[instrument(skip(self))]
    pub async fn copies_of(&self, book: BookId) -> Result<Vec<BookInstance>, BookInstanceError> {
        self.find(BookInstanceFilter::of_book(book)).await
    }

    /// Number of copies currently in `status`.
    #[instrument(skip(self))]
    pub async fn count_with_status(
        &self,
        status: BookInstanceStatus,
    ) -> Result<u64, BookInstanceError> {
        self.count(BookInstanceFilter::with_status(status)).await
    }
}

#[async_trait]
impl DocumentClient<BookInstance> for BookInstanceClient {
    type Error = BookInstanceError;

    fn inner(&self) -> &CollectionClient<BookInstance> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        BookInstanceError::StoreCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_store::mock::MockCollection;

    #[tokio::test]
    async fn test_count_with_status_sends_status_filter() {
        let mut mock = MockCollection::<BookInstance>::new();
        mock.expect_count_where(|f| {
            f.status == Some(BookInstanceStatus::Available) && f.book.is_none()
        })
        .return_ok(3);

        let client = BookInstanceClient::new(mock.client());
        let available = client
            .count_with_status(BookInstanceStatus::Available)
            .await
            .unwrap();

        assert_eq!(available, 3);
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_collection_error() {
        let mut mock = MockCollection::<BookInstance>::new();
        mock.expect_find().return_err(StoreError::Closed);

        let client = BookInstanceClient::new(mock.client());
        let result = client.copies_of(BookId(1)).await;

        assert_eq!(
            result,
            Err(BookInstanceError::StoreCommunicationError(
                "Collection closed".to_string()
            ))
        );
    }
}
