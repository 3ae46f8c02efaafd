//! Error types for the Author collection.

use thiserror::Error;

/// Errors that can occur during author operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthorError {
    /// The author data provided is invalid.
    #[error("Author validation error: {0}")]
    ValidationError(String),

    /// The collection could not be reached or rejected the request.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
