//! Sample data for local development.

use crate::error::AppError;
use crate::model::{NewHero, NewHeroPower, NewPower, Strength};
use crate::service::{HeroPowerService, HeroService, PowerService};
use crate::store;
use sqlx::SqlitePool;

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    ("flight", "gives the wielder the ability to fly through the skies at supersonic speed"),
    ("super human senses", "allows the wielder to use her senses at a super-human level"),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub heroes: usize,
    pub powers: usize,
    pub hero_powers: usize,
}

/// Replace all data with the sample set. Every hero gets one power, cycling through powers and strengths.
pub async fn run(pool: &SqlitePool) -> Result<SeedSummary, AppError> {
    store::clear_all(pool).await?;

    let mut powers = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        powers.push(PowerService::create(pool, &NewPower::new(*name, *description)?).await?);
    }

    let mut heroes = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        heroes.push(HeroService::create(pool, &NewHero::new(*name, *super_name)?).await?);
    }

    let mut hero_powers = 0;
    for (i, hero) in heroes.iter().enumerate() {
        let power = &powers[i % powers.len()];
        let strength = Strength::ALL[i % Strength::ALL.len()];
        let new = NewHeroPower::new(strength.as_str(), hero.id, power.id)?;
        HeroPowerService::create(pool, &new).await?;
        hero_powers += 1;
    }

    let summary = SeedSummary {
        heroes: heroes.len(),
        powers: powers.len(),
        hero_powers,
    };
    tracing::info!(?summary, "seeded");
    Ok(summary)
}
