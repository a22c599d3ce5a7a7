//! Record reads and writes against SQLite.

use crate::error::AppError;
use crate::model::{
    Hero, HeroGraph, HeroPower, HeroPowerWithHero, HeroPowerWithPower, NewHero, NewHeroPower, NewPower, Power,
    PowerGraph,
};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;

const HERO_COLUMNS: &str = "id, name, super_name";
const POWER_COLUMNS: &str = "id, name, description";
const HERO_POWER_COLUMNS: &str = "id, strength, hero_id, power_id";

/// `?, ?, ?` for an IN list of `n` values.
fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// Fetch rows of `table` whose id is in `ids`, keyed by id. Used to batch-load the far side of links.
async fn fetch_by_ids<T>(pool: &SqlitePool, table: &str, columns: &str, ids: &[i64]) -> Result<HashMap<i64, T>, AppError>
where
    T: for<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> + Send + Unpin + HasId,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }
    let sql = format!("SELECT {} FROM {} WHERE id IN ({})", columns, table, placeholders(ids.len()));
    tracing::debug!(sql = %sql, params = ?ids, "query");
    let mut query = sqlx::query_as::<_, T>(&sql);
    for id in ids {
        query = query.bind(*id);
    }
    let rows = query.fetch_all(pool).await?;
    Ok(rows.into_iter().map(|r| (r.id(), r)).collect())
}

trait HasId {
    fn id(&self) -> i64;
}

impl HasId for Hero {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for Power {
    fn id(&self) -> i64 {
        self.id
    }
}

async fn hero_exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM heroes WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.is_some())
}

async fn power_exists(conn: &mut SqliteConnection, id: i64) -> Result<bool, AppError> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM powers WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.is_some())
}

pub struct HeroService;

impl HeroService {
    /// All heroes, by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Hero>, AppError> {
        let sql = format!("SELECT {} FROM heroes ORDER BY id", HERO_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Hero>(&sql).fetch_all(pool).await?)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Hero>, AppError> {
        let sql = format!("SELECT {} FROM heroes WHERE id = ?", HERO_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Hero>(&sql).bind(id).fetch_optional(pool).await?)
    }

    /// Hero plus its hero_powers and their powers, or None if the hero does not exist.
    pub async fn read_graph(pool: &SqlitePool, id: i64) -> Result<Option<HeroGraph>, AppError> {
        let Some(hero) = Self::read(pool, id).await? else {
            return Ok(None);
        };
        let links = HeroPowerService::list_for_hero(pool, id).await?;
        let power_ids: Vec<i64> = links.iter().map(|l| l.power_id).collect();
        let powers: HashMap<i64, Power> = fetch_by_ids(pool, "powers", POWER_COLUMNS, &power_ids).await?;
        let hero_powers = links
            .into_iter()
            .filter_map(|hero_power| {
                let power = powers.get(&hero_power.power_id).cloned()?;
                Some(HeroPowerWithPower { hero_power, power })
            })
            .collect();
        Ok(Some(HeroGraph { hero, hero_powers }))
    }

    pub async fn create(pool: &SqlitePool, new: &NewHero) -> Result<Hero, AppError> {
        let sql = format!("INSERT INTO heroes (name, super_name) VALUES (?, ?) RETURNING {}", HERO_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let hero = sqlx::query_as::<_, Hero>(&sql)
            .bind(new.name())
            .bind(new.super_name())
            .fetch_one(pool)
            .await?;
        tracing::info!(id = hero.id, "hero created");
        Ok(hero)
    }

    /// Delete a hero; its hero_powers go with it. Returns false if there was no such hero.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = "DELETE FROM heroes WHERE id = ?", id, "query");
        let done = sqlx::query("DELETE FROM heroes WHERE id = ?").bind(id).execute(pool).await?;
        Ok(done.rows_affected() > 0)
    }
}

pub struct PowerService;

impl PowerService {
    /// All powers, by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Power>, AppError> {
        let sql = format!("SELECT {} FROM powers ORDER BY id", POWER_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Power>(&sql).fetch_all(pool).await?)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Power>, AppError> {
        let sql = format!("SELECT {} FROM powers WHERE id = ?", POWER_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Power>(&sql).bind(id).fetch_optional(pool).await?)
    }

    /// Power plus its hero_powers and their heroes, or None if the power does not exist.
    pub async fn read_graph(pool: &SqlitePool, id: i64) -> Result<Option<PowerGraph>, AppError> {
        let Some(power) = Self::read(pool, id).await? else {
            return Ok(None);
        };
        let links = HeroPowerService::list_for_power(pool, id).await?;
        let hero_ids: Vec<i64> = links.iter().map(|l| l.hero_id).collect();
        let heroes: HashMap<i64, Hero> = fetch_by_ids(pool, "heroes", HERO_COLUMNS, &hero_ids).await?;
        let hero_powers = links
            .into_iter()
            .filter_map(|hero_power| {
                let hero = heroes.get(&hero_power.hero_id).cloned()?;
                Some(HeroPowerWithHero { hero_power, hero })
            })
            .collect();
        Ok(Some(PowerGraph { power, hero_powers }))
    }

    pub async fn create(pool: &SqlitePool, new: &NewPower) -> Result<Power, AppError> {
        let sql = format!("INSERT INTO powers (name, description) VALUES (?, ?) RETURNING {}", POWER_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let power = sqlx::query_as::<_, Power>(&sql)
            .bind(new.name())
            .bind(new.description())
            .fetch_one(pool)
            .await?;
        tracing::info!(id = power.id, "power created");
        Ok(power)
    }

    /// Write back the mutable columns of `power`. Returns None if the row is gone.
    pub async fn update(pool: &SqlitePool, power: &Power) -> Result<Option<Power>, AppError> {
        let sql = format!(
            "UPDATE powers SET name = ?, description = ? WHERE id = ? RETURNING {}",
            POWER_COLUMNS
        );
        tracing::debug!(sql = %sql, id = power.id, "query");
        let updated = sqlx::query_as::<_, Power>(&sql)
            .bind(power.name())
            .bind(power.description())
            .bind(power.id)
            .fetch_optional(pool)
            .await?;
        if updated.is_some() {
            tracing::info!(id = power.id, "power updated");
        }
        Ok(updated)
    }

    /// Delete a power; its hero_powers go with it.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = "DELETE FROM powers WHERE id = ?", id, "query");
        let done = sqlx::query("DELETE FROM powers WHERE id = ?").bind(id).execute(pool).await?;
        Ok(done.rows_affected() > 0)
    }
}

pub struct HeroPowerService;

impl HeroPowerService {
    pub async fn list_for_hero(pool: &SqlitePool, hero_id: i64) -> Result<Vec<HeroPower>, AppError> {
        let sql = format!("SELECT {} FROM hero_powers WHERE hero_id = ? ORDER BY id", HERO_POWER_COLUMNS);
        tracing::debug!(sql = %sql, hero_id, "query");
        Ok(sqlx::query_as::<_, HeroPower>(&sql).bind(hero_id).fetch_all(pool).await?)
    }

    pub async fn list_for_power(pool: &SqlitePool, power_id: i64) -> Result<Vec<HeroPower>, AppError> {
        let sql = format!("SELECT {} FROM hero_powers WHERE power_id = ? ORDER BY id", HERO_POWER_COLUMNS);
        tracing::debug!(sql = %sql, power_id, "query");
        Ok(sqlx::query_as::<_, HeroPower>(&sql).bind(power_id).fetch_all(pool).await?)
    }

    /// Insert a link after checking both ends exist, in one transaction.
    pub async fn create(pool: &SqlitePool, new: &NewHeroPower) -> Result<HeroPower, AppError> {
        let mut tx = pool.begin().await?;
        if !hero_exists(&mut tx, new.hero_id).await? {
            return Err(AppError::NotFound("Hero"));
        }
        if !power_exists(&mut tx, new.power_id).await? {
            return Err(AppError::NotFound("Power"));
        }
        let sql = format!(
            "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?, ?, ?) RETURNING {}",
            HERO_POWER_COLUMNS
        );
        tracing::debug!(sql = %sql, hero_id = new.hero_id, power_id = new.power_id, "query (tx)");
        let hero_power = sqlx::query_as::<_, HeroPower>(&sql)
            .bind(new.strength.as_str())
            .bind(new.hero_id)
            .bind(new.power_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id = hero_power.id, hero_id = new.hero_id, power_id = new.power_id, "hero_power created");
        Ok(hero_power)
    }
}

#[cfg(test)]
mod tests {
    use super::placeholders;

    #[test]
    fn placeholder_list() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
    }
}
