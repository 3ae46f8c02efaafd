//! A small sample library, inserted through the same clients the controller uses so every
//! record goes through validation and reference checks.

use crate::clients::Catalog;
use crate::error::CatalogError;
use crate::model::{
    AuthorCreate, AuthorId, BookCreate, BookId, BookInstanceCreate, BookInstanceStatus,
    GenreCreate, GenreId,
};
use chrono::NaiveDate;
use tracing::info;

/// How many records [`populate`] inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub authors: usize,
    pub genres: usize,
    pub books: usize,
    pub book_instances: usize,
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub async fn populate(catalog: &Catalog) -> Result<SeedSummary, CatalogError> {
    let mut summary = SeedSummary::default();

    let authors = [
        ("Patrick", "Rothfuss", date(1973, 6, 6), None),
        ("Ben", "Bova", date(1932, 11, 8), None),
        ("Isaac", "Asimov", date(1920, 1, 2), date(1992, 4, 6)),
        ("Bob", "Billings", None, None),
    ];
    let mut author_ids: Vec<AuthorId> = Vec::with_capacity(authors.len());
    for (first_name, family_name, date_of_birth, date_of_death) in authors {
        let id = catalog
            .authors
            .create_author(AuthorCreate {
                first_name: first_name.to_string(),
                family_name: family_name.to_string(),
                date_of_birth,
                date_of_death,
            })
            .await?;
        author_ids.push(id);
        summary.authors += 1;
    }

    let mut genre_ids: Vec<GenreId> = Vec::new();
    for name in ["Fantasy", "Science Fiction", "French Poetry"] {
        let id = catalog
            .genres
            .create_genre(GenreCreate {
                name: name.to_string(),
            })
            .await?;
        genre_ids.push(id);
        summary.genres += 1;
    }

    let books = [
        (
            "The Name of the Wind (The Kingkiller Chronicle, #1)",
            0,
            "I have stolen princesses back from sleeping barrow kings. I burned down the town of Trebon.",
            "9781473211896",
            vec![0],
        ),
        (
            "The Wise Man's Fear (The Kingkiller Chronicle, #2)",
            0,
            "Picking up the tale of Kvothe Kingkiller once again.",
            "9788401352836",
            vec![0],
        ),
        (
            "Apes and Angels",
            1,
            "Humankind headed out to the stars not for conquest, nor exploration, nor even for curiosity.",
            "9780765379528",
            vec![1],
        ),
        (
            "Test Book 1",
            3,
            "Summary of test book 1",
            "ISBN111111",
            vec![0, 1],
        ),
    ];
    let mut book_ids: Vec<BookId> = Vec::with_capacity(books.len());
    for (title, author, summary_text, isbn, genres) in books {
        let id = catalog
            .books
            .create_book(BookCreate {
                title: title.to_string(),
                author: author_ids[author],
                summary: summary_text.to_string(),
                isbn: isbn.to_string(),
                genre: genres.into_iter().map(|g: usize| genre_ids[g]).collect(),
            })
            .await?;
        book_ids.push(id);
        summary.books += 1;
    }

    let copies = [
        (0, "London Gollancz, 2014.", BookInstanceStatus::Available, None),
        (1, "Gollancz, 2011.", BookInstanceStatus::Loaned, date(2026, 11, 1)),
        (2, "New York Tom Doherty Associates, 2016.", BookInstanceStatus::Available, None),
        (2, "New York Tom Doherty Associates, 2016.", BookInstanceStatus::Maintenance, None),
        (3, "Imprint XXX2", BookInstanceStatus::Reserved, None),
    ];
    for (book, imprint, status, due_back) in copies {
        catalog
            .book_instances
            .create_book_instance(BookInstanceCreate {
                book: book_ids[book],
                imprint: imprint.to_string(),
                status,
                due_back,
            })
            .await?;
        summary.book_instances += 1;
    }

    info!(?summary, "Sample library inserted");
    Ok(summary)
}
