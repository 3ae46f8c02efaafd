//! # Catalog Controller
//!
//! One method per user-facing action. Each declares the reads it needs as an
//! [`Aggregation`](crate::aggregate::Aggregation), applies the presentation logic
//! (existence checks, sorting, checkbox state) and returns a [`Response`] or a
//! [`CatalogError`] for the error handler.
//!
//! The controller holds no state besides the [`Catalog`] handle it was given, so it can be
//! cloned into every request.

pub mod book;
pub mod form;
pub mod index;
pub mod response;
pub mod views;

pub use form::{BookForm, FieldError};
pub use response::{Response, View};

use crate::aggregate::AggregationResult;
use crate::clients::Catalog;
use crate::error::CatalogError;
use crate::model::{
    Author, AuthorFilter, Book, BookDetail, BookFilter, BookId, BookInstance,
    BookInstanceFilter, BookInstanceStatus, Genre, GenreFilter,
};
use catalog_store::DocumentClient;
use std::future::Future;

#[derive(Clone)]
pub struct CatalogController {
    catalog: Catalog,
}

impl CatalogController {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

/// The value of one aggregation branch. Lets a single aggregation mix counts, lists and
/// single records.
#[derive(Debug)]
pub enum CatalogRead {
    Count(u64),
    Authors(Vec<Author>),
    Genres(Vec<Genre>),
    Book(Option<Book>),
    BookDetail(Option<BookDetail>),
    BookInstances(Vec<BookInstance>),
}

impl CatalogRead {
    pub fn into_count(self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(n),
            _ => None,
        }
    }

    pub fn into_authors(self) -> Option<Vec<Author>> {
        match self {
            Self::Authors(authors) => Some(authors),
            _ => None,
        }
    }

    pub fn into_genres(self) -> Option<Vec<Genre>> {
        match self {
            Self::Genres(genres) => Some(genres),
            _ => None,
        }
    }

    pub fn into_book(self) -> Option<Option<Book>> {
        match self {
            Self::Book(book) => Some(book),
            _ => None,
        }
    }

    pub fn into_book_detail(self) -> Option<Option<BookDetail>> {
        match self {
            Self::BookDetail(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn into_book_instances(self) -> Option<Vec<BookInstance>> {
        match self {
            Self::BookInstances(instances) => Some(instances),
            _ => None,
        }
    }
}

/// Takes branch `name` out of `results` as the variant `pick` expects.
fn take<T>(
    results: &mut AggregationResult<CatalogRead>,
    name: &str,
    pick: fn(CatalogRead) -> Option<T>,
) -> Result<T, CatalogError> {
    results
        .take(name)
        .and_then(pick)
        .ok_or_else(|| CatalogError::Internal(format!("branch `{name}` missing or mistyped")))
}

/// Branch futures. Each owns a clone of the client it needs so it can be spawned.
mod reads {
    use super::*;

    pub type Read = Result<CatalogRead, CatalogError>;

    pub fn count_books(catalog: &Catalog) -> impl Future<Output = Read> + Send + 'static {
        let books = catalog.books.clone();
        async move {
            books
                .count(BookFilter::default())
                .await
                .map(CatalogRead::Count)
                .map_err(CatalogError::from)
        }
    }

    pub fn count_book_instances(
        catalog: &Catalog,
    ) -> impl Future<Output = Read> + Send + 'static {
        let instances = catalog.book_instances.clone();
        async move {
            instances
                .count(BookInstanceFilter::default())
                .await
                .map(CatalogRead::Count)
                .map_err(CatalogError::from)
        }
    }

    pub fn count_book_instances_with_status(
        catalog: &Catalog,
        status: BookInstanceStatus,
    ) -> impl Future<Output = Read> + Send + 'static {
        let instances = catalog.book_instances.clone();
        async move {
            instances
                .count_with_status(status)
                .await
                .map(CatalogRead::Count)
                .map_err(CatalogError::from)
        }
    }

    pub fn count_authors(catalog: &Catalog) -> impl Future<Output = Read> + Send + 'static {
        let authors = catalog.authors.clone();
        async move {
            authors
                .count(AuthorFilter)
                .await
                .map(CatalogRead::Count)
                .map_err(CatalogError::from)
        }
    }

    pub fn count_genres(catalog: &Catalog) -> impl Future<Output = Read> + Send + 'static {
        let genres = catalog.genres.clone();
        async move {
            genres
                .count(GenreFilter)
                .await
                .map(CatalogRead::Count)
                .map_err(CatalogError::from)
        }
    }

    pub fn authors(catalog: &Catalog) -> impl Future<Output = Read> + Send + 'static {
        let authors = catalog.authors.clone();
        async move {
            authors
                .find(AuthorFilter)
                .await
                .map(CatalogRead::Authors)
                .map_err(CatalogError::from)
        }
    }

    pub fn genres(catalog: &Catalog) -> impl Future<Output = Read> + Send + 'static {
        let genres = catalog.genres.clone();
        async move {
            genres
                .find(GenreFilter)
                .await
                .map(CatalogRead::Genres)
                .map_err(CatalogError::from)
        }
    }

    pub fn book(catalog: &Catalog, id: BookId) -> impl Future<Output = Read> + Send + 'static {
        let books = catalog.books.clone();
        async move {
            books
                .get(id)
                .await
                .map(CatalogRead::Book)
                .map_err(CatalogError::from)
        }
    }

    pub fn book_detail(
        catalog: &Catalog,
        id: BookId,
    ) -> impl Future<Output = Read> + Send + 'static {
        let catalog = catalog.clone();
        async move {
            catalog
                .book_detail(id)
                .await
                .map(CatalogRead::BookDetail)
        }
    }

    pub fn copies_of(
        catalog: &Catalog,
        id: BookId,
    ) -> impl Future<Output = Read> + Send + 'static {
        let instances = catalog.book_instances.clone();
        async move {
            instances
                .copies_of(id)
                .await
                .map(CatalogRead::BookInstances)
                .map_err(CatalogError::from)
        }
    }
}
