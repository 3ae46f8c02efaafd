use crate::clients::Catalog;
use crate::{author_actor, book_actor, book_instance_actor, genre_actor};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("collection task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// The running document store: one actor per collection and the [`Catalog`] handle
/// that talks to them.
///
/// ```rust
/// use local_library::lifecycle::LibrarySystem;
/// use local_library::model::GenreCreate;
///
/// #[tokio::main]
/// async fn main() {
///     let system = LibrarySystem::new(8);
///     system
///         .catalog
///         .genres
///         .create_genre(GenreCreate { name: "Poetry".to_string() })
///         .await
///         .unwrap();
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct LibrarySystem {
    pub catalog: Catalog,
    handles: Vec<JoinHandle<()>>,
}

impl LibrarySystem {
    /// Creates and starts every collection, each with a request buffer of `capacity`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(capacity: usize) -> Self {
        let (author_actor, authors) = author_actor::new(capacity);
        let (genre_actor, genres) = genre_actor::new(capacity);
        let (book_actor, books) = book_actor::new(capacity);
        let (instance_actor, book_instances) = book_instance_actor::new(capacity);

        let handles = vec![
            tokio::spawn(author_actor.run(())),
            tokio::spawn(genre_actor.run(())),
            tokio::spawn(book_actor.run((authors.clone(), genres.clone()))),
            tokio::spawn(instance_actor.run(books.clone())),
        ];
        info!(capacity, "Library collections started");

        Self {
            catalog: Catalog::new(authors, books, genres, book_instances),
            handles,
        }
    }

    /// Closes every collection and waits for its task to finish.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down library collections...");
        drop(self.catalog);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Collection task failed");
                return Err(e.into());
            }
        }

        info!("Library shutdown complete.");
        Ok(())
    }
}
