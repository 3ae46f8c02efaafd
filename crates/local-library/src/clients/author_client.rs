use crate::author_actor::AuthorError;
use crate::model::{Author, AuthorCreate, AuthorId};
use async_trait::async_trait;
use catalog_store::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, instrument};

/// Client for the Author collection.
#[derive(Clone)]
pub struct AuthorClient {
    inner: CollectionClient<Author>,
}

impl AuthorClient {
    pub fn new(inner: CollectionClient<Author>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_author(&self, params: AuthorCreate) -> Result<AuthorId, AuthorError> {
        debug!("Sending request");
        self.inner.insert(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl DocumentClient<Author> for AuthorClient {
    type Error = AuthorError;

    fn inner(&self) -> &CollectionClient<Author> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        AuthorError::StoreCommunicationError(e.to_string())
    }
}
