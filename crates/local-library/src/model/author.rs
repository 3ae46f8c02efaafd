use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub u32);

impl From<u32> for AuthorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AuthorId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_id(s).map(Self)
    }
}

/// A writer referenced by books.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// "Family, First", or empty when either part is missing.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// "1920 - 1992", "1920 - " or empty.
    pub fn lifespan(&self) -> String {
        let year = |d: Option<NaiveDate>| d.map(|d| d.format("%Y").to_string());
        match (year(self.date_of_birth), year(self.date_of_death)) {
            (Some(born), Some(died)) => format!("{born} - {died}"),
            (Some(born), None) => format!("{born} - "),
            (None, Some(died)) => format!(" - {died}"),
            (None, None) => String::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

/// Payload for inserting an author.
#[derive(Debug, Clone, Default)]
pub struct AuthorCreate {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Authors are only ever listed in full.
#[derive(Debug, Clone, Default)]
pub struct AuthorFilter;
