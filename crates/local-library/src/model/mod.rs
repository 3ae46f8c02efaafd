//! Catalog records and the read models the controller renders.
//!
//! Each record type implements [`Document`](catalog_store::Document) in its `*_actor`
//! module, which is what lets a `CollectionActor` own it.

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

pub use author::*;
pub use book::*;
pub use book_instance::*;
pub use genre::*;

use std::num::ParseIntError;

/// Parses an id the way it appears in URLs and form fields (`"7"`, `" 7 "`).
fn parse_id(s: &str) -> Result<u32, ParseIntError> {
    s.trim().parse()
}
