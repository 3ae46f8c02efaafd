use crate::book_actor::BookError;
use crate::model::{Book, BookCreate, BookId};
use async_trait::async_trait;
use catalog_store::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for the Book collection.
///
/// Reference checks (author, genres) run in the book actor's `on_create` hook, so
/// `create_book` fails with the store's rejection when either does not resolve.
#[derive(Clone)]
pub struct BookClient {
    inner: CollectionClient<Book>,
}

impl BookClient {
    pub fn new(inner: CollectionClient<Book>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_book(&self, params: BookCreate) -> Result<BookId, BookError> {
        debug!("Sending request");
        let id = self.inner.insert(params).await.map_err(Self::map_error)?;
        info!(book_id = %id, "Book saved");
        Ok(id)
    }
}

#[async_trait]
impl DocumentClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &CollectionClient<Book> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        BookError::StoreCommunicationError(e.to_string())
    }
}
