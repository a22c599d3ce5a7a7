//! Hero-power links and the closed set of strengths.

use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match.
impl FromStr for Strength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or(ValidationError::InvalidStrength)
    }
}

impl TryFrom<String> for Strength {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Row of `hero_powers`: links one hero to one power.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct HeroPower {
    pub id: i64,
    #[sqlx(try_from = "String")]
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewHeroPower {
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
}

impl NewHeroPower {
    pub fn new(strength: &str, hero_id: i64, power_id: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            strength: strength.parse()?,
            hero_id,
            power_id,
        })
    }
}
