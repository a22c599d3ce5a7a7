//! Records loaded together with their associations.
//!
//! A graph is rooted at one owner and holds the other side of each link by
//! value, never a pointer back to the owner.

use super::{Hero, HeroPower, Power};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroPowerWithPower {
    pub hero_power: HeroPower,
    pub power: Power,
}

/// A hero and its hero_powers, each with the linked power.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroGraph {
    pub hero: Hero,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

impl HeroGraph {
    /// Powers reached through the hero's hero_powers.
    pub fn powers(&self) -> impl Iterator<Item = &Power> {
        self.hero_powers.iter().map(|hp| &hp.power)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroPowerWithHero {
    pub hero_power: HeroPower,
    pub hero: Hero,
}

/// A power and its hero_powers, each with the linked hero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerGraph {
    pub power: Power,
    pub hero_powers: Vec<HeroPowerWithHero>,
}

impl PowerGraph {
    /// Heroes reached through the power's hero_powers.
    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.hero_powers.iter().map(|hp| &hp.hero)
    }
}
