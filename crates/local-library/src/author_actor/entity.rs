//! [`Document`] implementation for [`Author`].

use super::AuthorError;
use crate::model::{Author, AuthorCreate, AuthorFilter, AuthorId};
use async_trait::async_trait;
use catalog_store::Document;

const MAX_NAME_LEN: usize = 100;

fn required_name(field: &str, value: String) -> Result<String, AuthorError> {
    let value = value.trim().to_string();
    if value.is_empty() || value.chars().count() > MAX_NAME_LEN {
        return Err(AuthorError::ValidationError(format!(
            "{field} must be 1 to {MAX_NAME_LEN} characters"
        )));
    }
    Ok(value)
}

#[async_trait]
impl Document for Author {
    type Id = AuthorId;
    type Create = AuthorCreate;
    type Filter = AuthorFilter;
    type Context = ();
    type Error = AuthorError;

    fn from_create(id: AuthorId, params: AuthorCreate) -> Result<Self, AuthorError> {
        Ok(Self {
            id,
            first_name: required_name("first_name", params.first_name)?,
            family_name: required_name("family_name", params.family_name)?,
            date_of_birth: params.date_of_birth,
            date_of_death: params.date_of_death,
        })
    }

    fn matches(&self, _filter: &AuthorFilter) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed_and_required() {
        let author = Author::from_create(
            AuthorId(1),
            AuthorCreate {
                first_name: "  Ursula ".into(),
                family_name: "Le Guin".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(author.name(), "Le Guin, Ursula");

        let missing = Author::from_create(
            AuthorId(2),
            AuthorCreate {
                first_name: "Ursula".into(),
                family_name: "   ".into(),
                ..Default::default()
            },
        );
        assert!(matches!(missing, Err(AuthorError::ValidationError(_))));
    }
}
