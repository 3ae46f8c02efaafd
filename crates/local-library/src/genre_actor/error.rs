//! Error types for the Genre collection.

use thiserror::Error;

/// Errors that can occur during genre operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenreError {
    /// The genre data provided is invalid.
    #[error("Genre validation error: {0}")]
    ValidationError(String),

    /// The collection could not be reached or rejected the request.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
