//! # Store Errors
//!
//! Errors raised by the collection plumbing itself. Record-level rejections are carried
//! inside [`StoreError::Rejected`] so callers can still downcast to the document's own error.

/// Errors that can occur while talking to a collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection closed")]
    Closed,
    #[error("Collection dropped response channel")]
    Dropped,
    #[error("Collection has no ids left")]
    Exhausted,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Document rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a document error.
    pub fn rejected(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Rejected(Box::new(e))
    }
}
