//! # Catalog Handle
//!
//! The single long-lived handle to the document store. It is created once by
//! [`LibrarySystem`](crate::lifecycle::LibrarySystem) and passed explicitly to whatever
//! needs store access; cloning it clones four channel senders.

use super::{AuthorClient, BookClient, BookInstanceClient, GenreClient};
use crate::error::CatalogError;
use crate::model::{
    Author, AuthorFilter, AuthorId, BookDetail, BookFilter, BookId, BookSummary, GenreFilter,
};
use catalog_store::DocumentClient;
use futures::TryFutureExt;
use std::collections::HashMap;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct Catalog {
    pub authors: AuthorClient,
    pub books: BookClient,
    pub genres: GenreClient,
    pub book_instances: BookInstanceClient,
}

impl Catalog {
    pub fn new(
        authors: AuthorClient,
        books: BookClient,
        genres: GenreClient,
        book_instances: BookInstanceClient,
    ) -> Self {
        Self {
            authors,
            books,
            genres,
            book_instances,
        }
    }

    /// Every book as a `title author` projection, author resolved, ascending by title.
    #[instrument(skip(self))]
    pub async fn book_summaries(&self) -> Result<Vec<BookSummary>, CatalogError> {
        let (books, authors) = futures::try_join!(
            self.books
                .find(BookFilter::default())
                .map_err(CatalogError::from),
            self.authors
                .find(AuthorFilter)
                .map_err(CatalogError::from),
        )?;

        let authors: HashMap<AuthorId, Author> =
            authors.into_iter().map(|a| (a.id, a)).collect();
        let mut summaries: Vec<BookSummary> = books
            .into_iter()
            .map(|book| BookSummary {
                id: book.id,
                author: authors.get(&book.author).cloned(),
                title: book.title,
            })
            .collect();
        summaries.sort_by(|a, b| a.title.cmp(&b.title));

        debug!(count = summaries.len(), "Book list populated");
        Ok(summaries)
    }

    /// A book with its author and genres resolved, or `None` when the id is unknown.
    ///
    /// Genres keep the book's order; references that no longer resolve are skipped.
    #[instrument(skip(self))]
    pub async fn book_detail(&self, id: BookId) -> Result<Option<BookDetail>, CatalogError> {
        let Some(book) = self.books.get(id).await? else {
            return Ok(None);
        };

        let (author, all_genres) = futures::try_join!(
            self.authors.get(book.author).map_err(CatalogError::from),
            self.genres.find(GenreFilter).map_err(CatalogError::from),
        )?;
        let genres = book
            .genre
            .iter()
            .filter_map(|id| all_genres.iter().find(|g| g.id == *id).cloned())
            .collect();

        Ok(Some(BookDetail {
            book,
            author,
            genres,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, BookInstance, Genre, GenreId};
    use catalog_store::mock::MockCollection;

    struct Mocks {
        authors: MockCollection<Author>,
        books: MockCollection<Book>,
        genres: MockCollection<Genre>,
        book_instances: MockCollection<BookInstance>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                authors: MockCollection::new(),
                books: MockCollection::new(),
                genres: MockCollection::new(),
                book_instances: MockCollection::new(),
            }
        }

        fn catalog(&self) -> Catalog {
            Catalog::new(
                AuthorClient::new(self.authors.client()),
                BookClient::new(self.books.client()),
                GenreClient::new(self.genres.client()),
                BookInstanceClient::new(self.book_instances.client()),
            )
        }
    }

    fn book(id: u32, title: &str, author: u32, genre: Vec<u32>) -> Book {
        Book {
            id: BookId(id),
            title: title.to_string(),
            author: AuthorId(author),
            summary: "summary".to_string(),
            isbn: "isbn".to_string(),
            genre: genre.into_iter().map(GenreId).collect(),
        }
    }

    fn author(id: u32, family_name: &str) -> Author {
        Author {
            id: AuthorId(id),
            first_name: "A.".to_string(),
            family_name: family_name.to_string(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    #[tokio::test]
    async fn test_detail_resolves_references_in_book_order() {
        let mut mocks = Mocks::new();
        mocks
            .books
            .expect_get(BookId(1))
            .return_ok(Some(book(1, "Emma", 4, vec![2, 9, 1])));
        mocks
            .authors
            .expect_get(AuthorId(4))
            .return_ok(Some(author(4, "Austen")));
        mocks.genres.expect_find().return_ok(vec![
            Genre {
                id: GenreId(1),
                name: "Romance".into(),
            },
            Genre {
                id: GenreId(2),
                name: "Satire".into(),
            },
        ]);

        let detail = mocks.catalog().book_detail(BookId(1)).await.unwrap().unwrap();
        let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Satire", "Romance"]);
        assert_eq!(detail.author.unwrap().family_name, "Austen");
        mocks.books.verify();
        mocks.authors.verify();
        mocks.genres.verify();
    }

    #[tokio::test]
    async fn test_summaries_keep_dangling_author_as_none() {
        let mut mocks = Mocks::new();
        mocks.books.expect_find().return_ok(vec![
            book(1, "Persuasion", 1, vec![]),
            book(2, "Beloved", 7, vec![]),
        ]);
        mocks
            .authors
            .expect_find()
            .return_ok(vec![author(1, "Austen")]);

        let summaries = mocks.catalog().book_summaries().await.unwrap();
        assert_eq!(summaries[0].title, "Beloved");
        assert!(summaries[0].author.is_none());
        assert_eq!(summaries[1].author.as_ref().unwrap().family_name, "Austen");
    }
}
