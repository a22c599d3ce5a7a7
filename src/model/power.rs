//! Power records, their validating setters and the allow-listed change set.

use super::require_non_empty;
use crate::error::ValidationError;
use serde::Serialize;

/// Shortest accepted description, counted in characters.
pub const MIN_DESCRIPTION_LEN: usize = 20;

fn validate_description(description: String) -> Result<String, ValidationError> {
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort {
            min: MIN_DESCRIPTION_LEN,
        });
    }
    Ok(description)
}

/// Row of `powers`. Fields change only through the validating setters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Power {
    pub id: i64,
    name: String,
    description: String,
}

impl Power {
    #[cfg(test)]
    pub(crate) fn from_parts(id: i64, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = require_non_empty("Name", name.into())?;
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), ValidationError> {
        self.description = validate_description(description.into())?;
        Ok(())
    }

    /// Apply every change or none of them.
    pub fn apply(&mut self, changes: PowerChanges) -> Result<(), ValidationError> {
        let mut next = self.clone();
        if let Some(name) = changes.name {
            next.set_name(name)?;
        }
        if let Some(description) = changes.description {
            next.set_description(description)?;
        }
        *self = next;
        Ok(())
    }
}

/// Fields a client may update on a power. Anything else is not writable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PowerChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl PowerChanges {
    pub const FIELDS: [&'static str; 2] = ["name", "description"];

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// A power not yet stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPower {
    name: String,
    description: String,
}

impl NewPower {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_non_empty("Name", name.into())?,
            description: validate_description(description.into())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
