//! [`Document`] implementation for [`Genre`].

use super::GenreError;
use crate::model::{Genre, GenreCreate, GenreFilter, GenreId};
use async_trait::async_trait;
use catalog_store::Document;

#[async_trait]
impl Document for Genre {
    type Id = GenreId;
    type Create = GenreCreate;
    type Filter = GenreFilter;
    type Context = ();
    type Error = GenreError;

    /// Names are 3 to 100 characters after trimming.
    fn from_create(id: GenreId, params: GenreCreate) -> Result<Self, GenreError> {
        let name = params.name.trim().to_string();
        if !(3..=100).contains(&name.chars().count()) {
            return Err(GenreError::ValidationError(format!(
                "name must be 3 to 100 characters, got {name:?}"
            )));
        }
        Ok(Self { id, name })
    }

    fn matches(&self, _filter: &GenreFilter) -> bool {
        true
    }
}
