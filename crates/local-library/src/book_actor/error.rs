//! Error types for the Book collection.

use crate::model::{AuthorId, GenreId};
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// A required field is missing or empty.
    #[error("Book validation error: {0}")]
    ValidationError(String),

    /// The referenced author does not exist.
    #[error("Author {0} does not exist")]
    UnknownAuthor(AuthorId),

    /// A referenced genre does not exist.
    #[error("Genre {0} does not exist")]
    UnknownGenre(GenreId),

    /// The collection could not be reached or rejected the request.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
