//! Hero records and the validated constructor for new heroes.

use super::require_non_empty;
use crate::error::ValidationError;
use serde::Serialize;

/// Row of `heroes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Hero {
    pub id: i64,
    name: String,
    super_name: String,
}

impl Hero {
    #[cfg(test)]
    pub(crate) fn from_parts(id: i64, name: &str, super_name: &str) -> Self {
        Self {
            id,
            name: name.into(),
            super_name: super_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn super_name(&self) -> &str {
        &self.super_name
    }
}

/// A hero not yet stored. Both names must be non-blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewHero {
    name: String,
    super_name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>, super_name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_non_empty("Name", name.into())?,
            super_name: require_non_empty("Super name", super_name.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn super_name(&self) -> &str {
        &self.super_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_verbatim() {
        let h = NewHero::new("Kamala Khan", " Ms. Marvel ").unwrap();
        assert_eq!(h.name(), "Kamala Khan");
        assert_eq!(h.super_name(), " Ms. Marvel ");
    }

    #[test]
    fn rejects_blank_names() {
        assert_eq!(
            NewHero::new("", "Storm").unwrap_err(),
            ValidationError::Empty { field: "Name" }
        );
        assert_eq!(
            NewHero::new("Ororo Munroe", "   ").unwrap_err(),
            ValidationError::Empty { field: "Super name" }
        );
    }
}
