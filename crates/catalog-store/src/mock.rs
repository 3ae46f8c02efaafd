//! # Mock Collections
//!
//! `MockCollection<T>` hands out a real [`CollectionClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running actor. Use it to test code that sits
//! on top of a client (controllers, client wrappers) deterministically, and to inject store
//! failures that are hard to provoke with a real collection.
//!
//! | | MockCollection | Real actor |
//! |---|---|---|
//! | **State** | none, only canned answers | real records |
//! | **Error injection** | `return_err` | needs a rejecting document |
//! | **Use case** | logic *around* the client | the collection itself, full system |
//!
//! Requests may arrive in any order (the controller fans reads out concurrently), so each
//! request is answered by the first queued expectation that accepts it, not simply the head.
//! Gets and removes are matched by id; finds and counts can be narrowed with a filter
//! predicate via [`MockCollection::expect_find_where`] / [`MockCollection::expect_count_where`].
//!
//! ```rust
//! use async_trait::async_trait;
//! use catalog_store::mock::MockCollection;
//! use catalog_store::{Document, StoreError};
//!
//! #[derive(Clone, Debug)] struct Note { id: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//!
//! #[async_trait]
//! impl Document for Note {
//!     type Id = u32; type Create = (); type Filter = (); type Context = (); type Error = NoteError;
//!     fn from_create(id: u32, _: ()) -> Result<Self, NoteError> { Ok(Self { id }) }
//!     fn matches(&self, _: &()) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCollection::<Note>::new();
//!     mock.expect_get(1).return_err(StoreError::Closed);
//!
//!     let result = mock.client().get(1).await;
//!     assert!(matches!(result, Err(StoreError::Closed)));
//!     mock.verify();
//! }
//! ```
//!
//! For tests that need to look at the exact request (e.g. the insert payload), use
//! [`create_mock_client`] with [`expect_insert`] / [`expect_get`] / [`expect_remove`].

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type FilterMatcher<T> = Box<dyn Fn(&<T as Document>::Filter) -> bool + Send + Sync>;
type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// One canned answer waiting for a matching request.
enum Expectation<T: Document> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Insert {
        response: Result<T::Id, StoreError>,
    },
    Find {
        matcher: Option<FilterMatcher<T>>,
        response: Result<Vec<T>, StoreError>,
    },
    Count {
        matcher: Option<FilterMatcher<T>>,
        response: Result<u64, StoreError>,
    },
    Remove {
        id: T::Id,
        response: Result<(), StoreError>,
    },
}

impl<T: Document> Expectation<T> {
    fn accepts(&self, request: &StoreRequest<T>) -> bool {
        match (self, request) {
            (Self::Get { id, .. }, StoreRequest::Get { id: asked, .. }) => id == asked,
            (Self::Insert { .. }, StoreRequest::Insert { .. }) => true,
            (Self::Find { matcher, .. }, StoreRequest::Find { filter, .. })
            | (Self::Count { matcher, .. }, StoreRequest::Count { filter, .. }) => {
                matcher.as_ref().map_or(true, |m| m(filter))
            }
            (Self::Remove { id, .. }, StoreRequest::Remove { id: asked, .. }) => id == asked,
            _ => false,
        }
    }
}

fn answer<R>(respond_to: Response<R>, response: Result<R, StoreError>) {
    let _ = respond_to.send(response);
}

/// A mock collection with expectation tracking.
pub struct MockCollection<T: Document> {
    client: CollectionClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockCollection<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut exps = queue.lock().unwrap();
                    let at = exps.iter().position(|e| e.accepts(&request));
                    at.and_then(|at| exps.remove(at))
                };

                match (request, expectation) {
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get { response, .. })) => {
                        answer(respond_to, response);
                    }
                    (StoreRequest::Insert { respond_to, .. }, Some(Expectation::Insert { response })) => {
                        answer(respond_to, response);
                    }
                    (StoreRequest::Find { respond_to, .. }, Some(Expectation::Find { response, .. })) => {
                        answer(respond_to, response);
                    }
                    (StoreRequest::Count { respond_to, .. }, Some(Expectation::Count { response, .. })) => {
                        answer(respond_to, response);
                    }
                    (StoreRequest::Remove { respond_to, .. }, Some(Expectation::Remove { response, .. })) => {
                        answer(respond_to, response);
                    }
                    (request, _) => {
                        panic!("Unexpected request: {request:?}");
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects an `insert`.
    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Insert { response })
    }

    /// Expects a `find` with any filter.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::Find {
            matcher: None,
            response,
        })
    }

    /// Expects a `find` whose filter satisfies `matcher`.
    pub fn expect_find_where(
        &mut self,
        matcher: impl Fn(&T::Filter) -> bool + Send + Sync + 'static,
    ) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(move |response| Expectation::Find {
            matcher: Some(Box::new(matcher)),
            response,
        })
    }

    /// Expects a `count` with any filter.
    pub fn expect_count(&mut self) -> ExpectationBuilder<T, u64> {
        self.builder(|response| Expectation::Count {
            matcher: None,
            response,
        })
    }

    /// Expects a `count` whose filter satisfies `matcher`.
    pub fn expect_count_where(
        &mut self,
        matcher: impl Fn(&T::Filter) -> bool + Send + Sync + 'static,
    ) -> ExpectationBuilder<T, u64> {
        self.builder(move |response| Expectation::Count {
            matcher: Some(Box::new(matcher)),
            response,
        })
    }

    /// Expects a `remove` for `id`.
    pub fn expect_remove(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Remove { id, response })
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation by choosing its answer.
pub struct ExpectationBuilder<T: Document, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Document, R> ExpectationBuilder<T, R> {
    /// Answer with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answer with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiving end of its channel.
///
/// The test plays the actor: it pulls requests off `receiver` (see [`expect_insert`] and
/// friends), inspects them, and answers through the enclosed one-shot sender.
pub fn create_mock_client<T: Document>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Next message, if it is an Insert.
pub async fn expect_insert<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get.
pub async fn expect_get<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Remove.
pub async fn expect_remove<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
