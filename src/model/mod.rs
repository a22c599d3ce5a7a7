//! Record types, validated constructors and loaded record graphs.

mod graph;
mod hero;
mod hero_power;
mod power;

pub use graph::{HeroGraph, HeroPowerWithHero, HeroPowerWithPower, PowerGraph};
pub use hero::{Hero, NewHero};
pub use hero_power::{HeroPower, NewHeroPower, Strength};
pub use power::{NewPower, Power, PowerChanges, MIN_DESCRIPTION_LEN};

use crate::error::ValidationError;

/// Reject empty or whitespace-only text. The value itself is kept as given.
pub(crate) fn require_non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}
