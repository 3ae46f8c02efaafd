//! # Book Form
//!
//! Turns a submitted create form into sanitized values plus the list of fields that
//! failed their constraints. Every text field is trimmed, checked, then HTML-escaped;
//! the length checks see the trimmed value, the view sees the escaped one.

use crate::error::CatalogError;
use crate::model::{AuthorId, BookCreate, Genre, GenreChoice, GenreId};
use serde::Serialize;
use std::str::FromStr;

/// One failed field constraint, as shown next to the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
    pub value: String,
}

/// A sanitized book submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
    /// Selected genre ids, always a list (possibly empty).
    pub genre: Vec<String>,
    #[serde(skip)]
    pub errors: Vec<FieldError>,
}

struct Rule {
    field: &'static str,
    min_len: usize,
    msg: &'static str,
}

const RULES: [Rule; 4] = [
    Rule {
        field: "title",
        min_len: 3,
        msg: "Title must not be empty.",
    },
    Rule {
        field: "author",
        min_len: 1,
        msg: "Author must not be empty",
    },
    Rule {
        field: "summary",
        min_len: 1,
        msg: "Summary must not be empty.",
    },
    Rule {
        field: "isbn",
        min_len: 1,
        msg: "ISBN must not be empty",
    },
];

impl BookForm {
    /// Builds the form from raw `(name, value)` pairs.
    ///
    /// `genre` may appear any number of times; zero occurrences give an empty list.
    /// For the other fields the last occurrence wins and a missing field counts as empty.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        let [mut title, mut author, mut summary, mut isbn] = <[String; 4]>::default();

        for (name, value) in fields {
            let slot = match name.as_ref() {
                "title" => &mut title,
                "author" => &mut author,
                "summary" => &mut summary,
                "isbn" => &mut isbn,
                "genre" => {
                    form.genre.push(escape(&value.into()));
                    continue;
                }
                _ => continue,
            };
            *slot = value.into();
        }

        form.title = form.sanitize(&RULES[0], &title);
        form.author = form.sanitize(&RULES[1], &author);
        form.summary = form.sanitize(&RULES[2], &summary);
        form.isbn = form.sanitize(&RULES[3], &isbn);
        form
    }

    /// Trims, records a [`FieldError`] if the rule fails, and escapes.
    fn sanitize(&mut self, rule: &Rule, value: &str) -> String {
        let trimmed = value.trim();
        if trimmed.chars().count() < rule.min_len {
            self.errors.push(FieldError {
                param: rule.field.to_string(),
                msg: rule.msg.to_string(),
                value: trimmed.to_string(),
            });
        }
        escape(trimmed)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The insert payload. An author or genre value that is not an id is a store error,
    /// the same failure the store reports for a reference that does not resolve.
    pub fn to_create(&self) -> Result<BookCreate, CatalogError> {
        let genre = self
            .genre
            .iter()
            .map(|g| parse_ref::<GenreId>("genre", g))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BookCreate {
            title: self.title.clone(),
            author: parse_ref::<AuthorId>("author", &self.author)?,
            summary: self.summary.clone(),
            isbn: self.isbn.clone(),
            genre,
        })
    }
}

fn parse_ref<T: FromStr>(path: &str, value: &str) -> Result<T, CatalogError> {
    value.parse().map_err(|_| {
        CatalogError::Store(format!("Cast to id failed for value {value:?} at path {path:?}"))
    })
}

/// Pairs each genre with whether `selected` names it.
pub fn mark_selected(genres: Vec<Genre>, selected: &[String]) -> Vec<GenreChoice> {
    genres
        .into_iter()
        .map(|genre| {
            let checked = selected.contains(&genre.id.to_string());
            GenreChoice { genre, checked }
        })
        .collect()
}

/// HTML-escapes `&`, `"`, `'`, `<`, `>`, `/`, `\` and backtick.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            c => out.push(c),
        }
    }
    out
}
