//! # Catalog Errors
//!
//! What the controller hands to the error handler. Validation failures and blocked
//! deletions are not errors: the controller recovers from them by re-rendering a view.

use crate::aggregate::AggregateError;
use crate::author_actor::AuthorError;
use crate::book_actor::BookError;
use crate::book_instance_actor::BookInstanceError;
use crate::genre_actor::GenreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested record does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// A store operation failed.
    #[error("Store error: {0}")]
    Store(String),

    /// A read fan-out was malformed or one of its branches panicked.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// HTTP-style status code for the error handler.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Store(_) | Self::Internal(_) => 500,
        }
    }
}

impl From<AuthorError> for CatalogError {
    fn from(e: AuthorError) -> Self {
        Self::Store(e.to_string())
    }
}

impl From<BookError> for CatalogError {
    fn from(e: BookError) -> Self {
        Self::Store(e.to_string())
    }
}

impl From<GenreError> for CatalogError {
    fn from(e: GenreError) -> Self {
        Self::Store(e.to_string())
    }
}

impl From<BookInstanceError> for CatalogError {
    fn from(e: BookInstanceError) -> Self {
        Self::Store(e.to_string())
    }
}

/// A failed branch surfaces its own error unchanged.
impl From<AggregateError<CatalogError>> for CatalogError {
    fn from(e: AggregateError<CatalogError>) -> Self {
        match e {
            AggregateError::Branch { source, .. } => source,
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let missing = CatalogError::not_found("Book", 9);
        assert_eq!(missing.status(), 404);
        assert_eq!(missing.to_string(), "Book not found");
        assert_eq!(CatalogError::Store("boom".into()).status(), 500);
    }

    #[test]
    fn test_branch_error_is_unwrapped() {
        let err = AggregateError::Branch {
            name: "book".to_string(),
            source: CatalogError::not_found("Book", 3),
        };
        assert_eq!(CatalogError::from(err), CatalogError::not_found("Book", 3));

        let dup: AggregateError<CatalogError> = AggregateError::DuplicateBranch("book".into());
        assert!(matches!(CatalogError::from(dup), CatalogError::Internal(_)));
    }
}
