//! # Collection Clients
//!
//! Typed wrappers around [`CollectionClient`](catalog_store::CollectionClient), one per
//! collection, plus the [`Catalog`] handle that bundles all four and knows how to
//! resolve references ("populate") for the read models the controller renders.
//!
//! Reads and removal come from [`DocumentClient`](catalog_store::DocumentClient); each
//! wrapper adds its own `create_*` method and maps store failures to its collection error.

pub mod author_client;
pub mod book_client;
pub mod book_instance_client;
pub mod catalog;
pub mod genre_client;

pub use author_client::AuthorClient;
pub use book_client::BookClient;
pub use book_instance_client::BookInstanceClient;
pub use catalog::Catalog;
pub use genre_client::GenreClient;
