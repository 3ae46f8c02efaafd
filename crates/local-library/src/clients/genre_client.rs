use crate::genre_actor::GenreError;
use crate::model::{Genre, GenreCreate, GenreId};
use async_trait::async_trait;
use catalog_store::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, instrument};

/// Client for the Genre collection.
#[derive(Clone)]
pub struct GenreClient {
    inner: CollectionClient<Genre>,
}

impl GenreClient {
    pub fn new(inner: CollectionClient<Genre>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_genre(&self, params: GenreCreate) -> Result<GenreId, GenreError> {
        debug!("Sending request");
        self.inner.insert(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl DocumentClient<Genre> for GenreClient {
    type Error = GenreError;

    fn inner(&self) -> &CollectionClient<Genre> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        GenreError::StoreCommunicationError(e.to_string())
    }
}
