//! # System Lifecycle
//!
//! Starting, wiring and stopping the four collection actors, plus process-wide tracing
//! and the sample data the binary starts with.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies only when started
//! (`run(context)`):
//!
//! ```rust,ignore
//! let (author_actor, authors) = author_actor::new(capacity);
//! let (genre_actor, genres) = genre_actor::new(capacity);
//! let (book_actor, books) = book_actor::new(capacity);
//! let (instance_actor, book_instances) = book_instance_actor::new(capacity);
//!
//! tokio::spawn(author_actor.run(()));
//! tokio::spawn(genre_actor.run(()));
//! tokio::spawn(book_actor.run((authors.clone(), genres.clone())));
//! tokio::spawn(instance_actor.run(books.clone()));
//! ```
//!
//! ## Shutdown
//!
//! Dropping every client closes the channels; each actor drains and exits. The
//! dependency graph (copies → books → authors, genres) is acyclic, so the context clones
//! held by dependent actors are released as those actors exit. Any [`Catalog`] clone
//! handed out (e.g. to the HTTP router) must be dropped before [`LibrarySystem::shutdown`]
//! can complete.
//!
//! [`Catalog`]: crate::clients::Catalog

pub mod library_system;
pub mod seed;
pub mod tracing;

pub use library_system::*;
pub use self::tracing::*;
