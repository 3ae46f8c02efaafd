//! Error types for the BookInstance collection.

use crate::model::BookId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookInstanceError {
    #[error("BookInstance validation error: {0}")]
    ValidationError(String),

    #[error("Book {0} does not exist")]
    UnknownBook(BookId),

    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
