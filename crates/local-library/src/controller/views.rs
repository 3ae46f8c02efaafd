//! JSON shapes of records as handed to views, with derived fields (`name`, `url`, ...)
//! filled in.

use crate::model::{Author, Book, BookDetail, BookInstance, BookSummary, Genre, GenreChoice};
use serde_json::{json, Value};

pub fn author(author: &Author) -> Value {
    json!({
        "id": author.id,
        "first_name": author.first_name,
        "family_name": author.family_name,
        "date_of_birth": author.date_of_birth,
        "date_of_death": author.date_of_death,
        "name": author.name(),
        "lifespan": author.lifespan(),
        "url": author.url(),
    })
}

pub fn genre(genre: &Genre) -> Value {
    json!({ "id": genre.id, "name": genre.name, "url": genre.url() })
}

pub fn genre_choice(choice: &GenreChoice) -> Value {
    let mut value = genre(&choice.genre);
    value["checked"] = Value::Bool(choice.checked);
    value
}

/// A book with its references left as ids.
pub fn book(book: &Book) -> Value {
    json!({
        "id": book.id,
        "title": book.title,
        "author": book.author,
        "summary": book.summary,
        "isbn": book.isbn,
        "genre": book.genre,
        "url": book.url(),
    })
}

pub fn book_summary(summary: &BookSummary) -> Value {
    json!({
        "id": summary.id,
        "title": summary.title,
        "author": summary.author.as_ref().map(author),
        "url": crate::model::book_url(summary.id),
    })
}

/// A book with author and genres resolved in place of their ids.
pub fn book_detail(detail: &BookDetail) -> Value {
    let mut value = book(&detail.book);
    value["author"] = detail.author.as_ref().map(author).unwrap_or(Value::Null);
    value["genre"] = detail.genres.iter().map(genre).collect();
    value
}

pub fn book_instance(instance: &BookInstance) -> Value {
    json!({
        "id": instance.id,
        "book": instance.book,
        "imprint": instance.imprint,
        "status": instance.status.to_string(),
        "due_back": instance.due_back,
        "url": instance.url(),
    })
}

pub fn list<T>(items: &[T], shape: fn(&T) -> Value) -> Value {
    items.iter().map(shape).collect()
}
