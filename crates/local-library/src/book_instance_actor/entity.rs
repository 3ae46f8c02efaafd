//! [`Document`] implementation for [`BookInstance`].

use super::BookInstanceError;
use crate::clients::BookClient;
use crate::model::{BookInstance, BookInstanceCreate, BookInstanceFilter, BookInstanceId};
use async_trait::async_trait;
use catalog_store::{Document, DocumentClient};

#[async_trait]
impl Document for BookInstance {
    type Id = BookInstanceId;
    type Create = BookInstanceCreate;
    type Filter = BookInstanceFilter;
    type Context = BookClient;
    type Error = BookInstanceError;

    fn from_create(
        id: BookInstanceId,
        params: BookInstanceCreate,
    ) -> Result<Self, BookInstanceError> {
        let imprint = params.imprint.trim().to_string();
        if imprint.is_empty() {
            return Err(BookInstanceError::ValidationError(
                "imprint is required".into(),
            ));
        }
        Ok(Self {
            id,
            book: params.book,
            imprint,
            status: params.status,
            due_back: params
                .due_back
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        })
    }

    fn matches(&self, filter: &BookInstanceFilter) -> bool {
        filter.book.map_or(true, |book| book == self.book)
            && filter.status.map_or(true, |status| status == self.status)
    }

    async fn on_create(&mut self, books: &BookClient) -> Result<(), BookInstanceError> {
        let book = books
            .get(self.book)
            .await
            .map_err(|e| BookInstanceError::StoreCommunicationError(e.to_string()))?;
        match book {
            Some(_) => Ok(()),
            None => Err(BookInstanceError::UnknownBook(self.book)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookId, BookInstanceStatus};

    fn copy(book: u32, status: BookInstanceStatus) -> BookInstance {
        BookInstance::from_create(
            BookInstanceId(1),
            BookInstanceCreate {
                book: BookId(book),
                imprint: "Gollancz, 2011".into(),
                status,
                due_back: None,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_due_back_defaults_to_today() {
        let instance = copy(1, BookInstanceStatus::default());
        assert_eq!(instance.status, BookInstanceStatus::Maintenance);
        assert_eq!(instance.due_back, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_filter_by_book_and_status() {
        let instance = copy(3, BookInstanceStatus::Available);
        assert!(instance.matches(&BookInstanceFilter::default()));
        assert!(instance.matches(&BookInstanceFilter::of_book(BookId(3))));
        assert!(!instance.matches(&BookInstanceFilter::of_book(BookId(4))));
        assert!(instance.matches(&BookInstanceFilter::with_status(
            BookInstanceStatus::Available
        )));
        assert!(!instance.matches(&BookInstanceFilter::with_status(
            BookInstanceStatus::Loaned
        )));
    }
}
