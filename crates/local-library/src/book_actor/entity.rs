//! [`Document`] implementation for [`Book`].

use super::BookError;
use crate::clients::{AuthorClient, GenreClient};
use crate::model::{Book, BookCreate, BookFilter, BookId};
use async_trait::async_trait;
use catalog_store::{Document, DocumentClient};
use tracing::debug;

fn required(field: &str, value: String) -> Result<String, BookError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(BookError::ValidationError(format!("{field} is required")));
    }
    Ok(value)
}

#[async_trait]
impl Document for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Filter = BookFilter;
    type Context = (AuthorClient, GenreClient);
    type Error = BookError;

    fn from_create(id: BookId, params: BookCreate) -> Result<Self, BookError> {
        Ok(Self {
            id,
            title: required("title", params.title)?,
            author: params.author,
            summary: required("summary", params.summary)?,
            isbn: required("isbn", params.isbn)?,
            genre: params.genre,
        })
    }

    fn matches(&self, filter: &BookFilter) -> bool {
        filter
            .title
            .as_ref()
            .map_or(true, |title| *title == self.title)
    }

    /// Refuses the book unless its author and every genre exist.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), BookError> {
        let (authors, genres) = ctx;
        debug!(author = %self.author, "Checking author reference");
        let author = authors
            .get(self.author)
            .await
            .map_err(|e| BookError::StoreCommunicationError(e.to_string()))?;
        if author.is_none() {
            return Err(BookError::UnknownAuthor(self.author));
        }

        for genre in &self.genre {
            let found = genres
                .get(*genre)
                .await
                .map_err(|e| BookError::StoreCommunicationError(e.to_string()))?;
            if found.is_none() {
                return Err(BookError::UnknownGenre(*genre));
            }
        }
        Ok(())
    }
}
