use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(pub u32);

impl From<u32> for GenreId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GenreId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_id(s).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

#[derive(Debug, Clone)]
pub struct GenreCreate {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenreFilter;

/// A genre as offered on the book form, with its checkbox state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreChoice {
    #[serde(flatten)]
    pub genre: Genre,
    pub checked: bool,
}
