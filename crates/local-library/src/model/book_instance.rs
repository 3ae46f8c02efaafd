use crate::model::BookId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for BookInstances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookInstanceId(pub u32);

impl From<u32> for BookInstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BookInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookInstanceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_id(s).map(Self)
    }
}

/// Circulation state of one physical copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl Display for BookInstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Available => "Available",
            Self::Maintenance => "Maintenance",
            Self::Loaned => "Loaned",
            Self::Reserved => "Reserved",
        };
        f.write_str(label)
    }
}

/// A physical copy of a [`Book`](crate::model::Book).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookInstance {
    pub id: BookInstanceId,
    pub book: BookId,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: NaiveDate,
}

impl BookInstance {
    pub fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }
}

/// Payload for inserting a copy. `due_back` defaults to the day of insertion.
#[derive(Debug, Clone)]
pub struct BookInstanceCreate {
    pub book: BookId,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct BookInstanceFilter {
    pub book: Option<BookId>,
    pub status: Option<BookInstanceStatus>,
}

impl BookInstanceFilter {
    /// Copies of one book.
    pub fn of_book(book: BookId) -> Self {
        Self {
            book: Some(book),
            status: None,
        }
    }

    /// Copies in one state.
    pub fn with_status(status: BookInstanceStatus) -> Self {
        Self {
            book: None,
            status: Some(status),
        }
    }
}
