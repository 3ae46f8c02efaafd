use catalog_store::DocumentClient;
use local_library::book_instance_actor::BookInstanceError;
use local_library::genre_actor::GenreError;
use local_library::lifecycle::{seed, LibrarySystem};
use local_library::model::{BookId, BookInstanceCreate, BookInstanceStatus, GenreCreate};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn test_seed_then_clean_shutdown() {
    let system = LibrarySystem::new(4);

    let summary = seed::populate(&system.catalog).await.unwrap();
    assert_eq!(summary.authors, 4);
    assert_eq!(summary.genres, 3);
    assert_eq!(summary.books, 4);
    assert_eq!(summary.book_instances, 5);
    assert_eq!(
        system.catalog.books.count(Default::default()).await.unwrap(),
        4
    );

    timeout(Duration::from_secs(5), system.shutdown())
        .await
        .expect("collections did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_references_are_checked_across_collections() {
    let system = LibrarySystem::new(4);

    let orphan = system
        .catalog
        .book_instances
        .create_book_instance(BookInstanceCreate {
            book: BookId(1),
            imprint: "Nowhere Press".to_string(),
            status: BookInstanceStatus::Available,
            due_back: None,
        })
        .await;
    match orphan {
        Err(BookInstanceError::StoreCommunicationError(msg)) => {
            assert!(msg.contains("Book 1 does not exist"), "{msg}")
        }
        other => panic!("Expected rejection, got {other:?}"),
    }

    let short = system
        .catalog
        .genres
        .create_genre(GenreCreate {
            name: "Ok".to_string(),
        })
        .await;
    assert!(matches!(short, Err(GenreError::StoreCommunicationError(_))));

    system.shutdown().await.unwrap();
}
