use crate::model::{Author, AuthorId, Genre, GenreId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_id(s).map(Self)
    }
}

/// A catalogued title. Copies on the shelf are [`BookInstance`](crate::model::BookInstance)s.
///
/// `author` and `genre` are references; see [`BookDetail`] for the resolved form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: AuthorId,
    pub summary: String,
    pub isbn: String,
    pub genre: Vec<GenreId>,
}

impl Book {
    pub fn url(&self) -> String {
        book_url(self.id)
    }
}

/// Detail page of a book.
pub fn book_url(id: BookId) -> String {
    format!("/catalog/book/{id}")
}

/// Payload for inserting a book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCreate {
    pub title: String,
    pub author: AuthorId,
    pub summary: String,
    pub isbn: String,
    pub genre: Vec<GenreId>,
}

#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub title: Option<String>,
}

/// `title author` projection of a book, author resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    pub author: Option<Author>,
}

/// A book with its author and genres resolved.
///
/// A dangling reference resolves to `None` / is skipped rather than failing the read.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetail {
    pub book: Book,
    pub author: Option<Author>,
    pub genres: Vec<Genre>,
}
