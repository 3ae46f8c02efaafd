//! Book actions: list, detail, create, delete and the update placeholders.

use super::form::{mark_selected, BookForm};
use super::views::{self, list};
use super::{reads, take, CatalogController, CatalogRead, Response};
use crate::aggregate::Aggregation;
use crate::error::CatalogError;
use crate::model::{book_url, BookId};
use catalog_store::DocumentClient;
use serde_json::{json, Value};
use tracing::{info, instrument};

/// Where the client goes after a delete, or when asked to delete a book that is gone.
pub const BOOK_LIST_URL: &str = "/catalog/books";

impl CatalogController {
    /// All books, `title author` only, ascending by title.
    #[instrument(skip(self))]
    pub async fn book_list(&self) -> Result<Response, CatalogError> {
        let books = self.catalog.book_summaries().await?;
        Ok(Response::render(
            "book_list",
            json!({ "title": "Book List", "book_list": list(&books, views::book_summary) }),
        ))
    }

    /// One book with its copies. An unknown id is a 404.
    #[instrument(skip(self))]
    pub async fn book_detail(&self, id: BookId) -> Result<Response, CatalogError> {
        let mut results = Aggregation::new()
            .branch("book", reads::book_detail(&self.catalog, id))
            .branch("book_instance", reads::copies_of(&self.catalog, id))
            .join()
            .await?;

        let Some(detail) = take(&mut results, "book", CatalogRead::into_book_detail)? else {
            return Err(CatalogError::not_found("Book", id));
        };
        let instances = take(&mut results, "book_instance", CatalogRead::into_book_instances)?;

        Ok(Response::render(
            "book_detail",
            json!({
                "title": detail.book.title,
                "book": views::book_detail(&detail),
                "book_instances": list(&instances, views::book_instance),
            }),
        ))
    }

    /// Empty create form with every author and genre to choose from.
    #[instrument(skip(self))]
    pub async fn book_create_get(&self) -> Result<Response, CatalogError> {
        let mut results = Aggregation::new()
            .branch("authors", reads::authors(&self.catalog))
            .branch("genres", reads::genres(&self.catalog))
            .join()
            .await?;
        let authors = take(&mut results, "authors", CatalogRead::into_authors)?;
        let genres = take(&mut results, "genres", CatalogRead::into_genres)?;

        Ok(Response::render(
            "book_form",
            json!({
                "title": "Create Book",
                "authors": list(&authors, views::author),
                "genres": list(&genres, views::genre),
            }),
        ))
    }

    /// Saves a valid submission and redirects to the new book. An invalid one re-renders
    /// the form with the entered values, the errors and the chosen genres checked.
    #[instrument(skip(self, form), fields(title = %form.title))]
    pub async fn book_create_post(&self, form: BookForm) -> Result<Response, CatalogError> {
        if !form.is_valid() {
            info!(errors = form.errors.len(), "Book form rejected");
            let mut results = Aggregation::new()
                .branch("authors", reads::authors(&self.catalog))
                .branch("genres", reads::genres(&self.catalog))
                .join()
                .await?;
            let authors = take(&mut results, "authors", CatalogRead::into_authors)?;
            let genres = take(&mut results, "genres", CatalogRead::into_genres)?;
            let choices = mark_selected(genres, &form.genre);

            return Ok(Response::render(
                "book_form",
                json!({
                    "title": "Create Book",
                    "authors": list(&authors, views::author),
                    "genres": list(&choices, views::genre_choice),
                    "book": form,
                    "errors": form.errors,
                }),
            ));
        }

        let id = self.catalog.books.create_book(form.to_create()?).await?;
        Ok(Response::redirect(book_url(id)))
    }

    /// Delete confirmation listing the copies that would block deletion.
    #[instrument(skip(self))]
    pub async fn book_delete_get(&self, id: BookId) -> Result<Response, CatalogError> {
        let mut results = Aggregation::new()
            .branch("book", reads::book(&self.catalog, id))
            .branch("bookinstances", reads::copies_of(&self.catalog, id))
            .join()
            .await?;

        let Some(book) = take(&mut results, "book", CatalogRead::into_book)? else {
            return Ok(Response::redirect(BOOK_LIST_URL));
        };
        let instances = take(&mut results, "bookinstances", CatalogRead::into_book_instances)?;

        Ok(Response::render(
            "book_delete",
            json!({
                "title": "Delete Book",
                "book": views::book(&book),
                "bookinstances": list(&instances, views::book_instance),
            }),
        ))
    }

    /// Removes the book unless copies of it still exist, in which case the confirmation
    /// view is shown again with those copies. Deleting a book that is already gone just
    /// redirects to the list.
    #[instrument(skip(self))]
    pub async fn book_delete_post(&self, id: BookId) -> Result<Response, CatalogError> {
        let mut results = Aggregation::new()
            .branch("book", reads::book_detail(&self.catalog, id))
            .branch("book_bookinstances", reads::copies_of(&self.catalog, id))
            .join()
            .await?;
        let detail = take(&mut results, "book", CatalogRead::into_book_detail)?;
        let instances = take(
            &mut results,
            "book_bookinstances",
            CatalogRead::into_book_instances,
        )?;

        if !instances.is_empty() {
            info!(copies = instances.len(), "Deletion blocked by dependent copies");
            return Ok(Response::render(
                "book_delete",
                json!({
                    "title": "Delete Book",
                    "book": detail.as_ref().map(views::book_detail).unwrap_or(Value::Null),
                    "bookinstances": list(&instances, views::book_instance),
                }),
            ));
        }

        if detail.is_some() {
            self.catalog.books.remove(id).await?;
            info!(book_id = %id, "Book deleted");
        }
        Ok(Response::redirect(BOOK_LIST_URL))
    }

    pub fn book_update_get(&self) -> Response {
        Response::text("NOT IMPLEMENTED: Book update GET")
    }

    pub fn book_update_post(&self) -> Response {
        Response::text("NOT IMPLEMENTED: Book update POST")
    }
}
