//! JSON projection of records with an explicit allow-list of relationship paths.
//!
//! Columns are always emitted. A relationship appears only when its path is
//! listed in the [`Rules`] passed to that call; nested paths are dotted
//! (`hero_powers.power`) and only apply when their parent is listed too.

use crate::error::AppError;
use crate::model::{Hero, HeroGraph, HeroPower, Power, PowerGraph};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Relationship paths a hero may expand.
pub const HERO_PATHS: &[&str] = &["hero_powers", "hero_powers.power", "powers"];
/// Relationship paths a power may expand.
pub const POWER_PATHS: &[&str] = &["hero_powers", "hero_powers.hero", "heroes"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    paths: BTreeSet<String>,
}

impl Rules {
    /// Columns only.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated list, rejecting paths outside `allowed`.
    pub fn parse(raw: &str, allowed: &[&str]) -> Result<Self, AppError> {
        let mut paths = BTreeSet::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if !allowed.contains(&part) {
                return Err(AppError::BadRequest(format!("Unknown include path: {}", part)));
            }
            paths.insert(part.to_string());
        }
        Ok(Self { paths })
    }

    pub fn includes(&self, relation: &str) -> bool {
        self.paths.contains(relation)
    }

    /// Rules relative to `relation`: `hero_powers.power` under `hero_powers` becomes `power`.
    pub fn nested(&self, relation: &str) -> Rules {
        let prefix = format!("{}.", relation);
        Rules {
            paths: self
                .paths
                .iter()
                .filter_map(|p| p.strip_prefix(&prefix).map(str::to_string))
                .collect(),
        }
    }
}

pub trait ToDict {
    fn to_dict(&self, rules: &Rules) -> Value;
}

fn columns<T: Serialize>(record: &T) -> Map<String, Value> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

impl ToDict for Hero {
    fn to_dict(&self, _rules: &Rules) -> Value {
        Value::Object(columns(self))
    }
}

impl ToDict for Power {
    fn to_dict(&self, _rules: &Rules) -> Value {
        Value::Object(columns(self))
    }
}

impl ToDict for HeroPower {
    fn to_dict(&self, _rules: &Rules) -> Value {
        Value::Object(columns(self))
    }
}

impl ToDict for HeroGraph {
    fn to_dict(&self, rules: &Rules) -> Value {
        let mut map = columns(&self.hero);
        if rules.includes("hero_powers") {
            let inner = rules.nested("hero_powers");
            let items = self
                .hero_powers
                .iter()
                .map(|link| {
                    let mut item = columns(&link.hero_power);
                    if inner.includes("power") {
                        item.insert("power".into(), link.power.to_dict(&inner.nested("power")));
                    }
                    Value::Object(item)
                })
                .collect();
            map.insert("hero_powers".into(), Value::Array(items));
        }
        if rules.includes("powers") {
            let powers = self.powers().map(|p| p.to_dict(&Rules::none())).collect();
            map.insert("powers".into(), Value::Array(powers));
        }
        Value::Object(map)
    }
}

impl ToDict for PowerGraph {
    fn to_dict(&self, rules: &Rules) -> Value {
        let mut map = columns(&self.power);
        if rules.includes("hero_powers") {
            let inner = rules.nested("hero_powers");
            let items = self
                .hero_powers
                .iter()
                .map(|link| {
                    let mut item = columns(&link.hero_power);
                    if inner.includes("hero") {
                        item.insert("hero".into(), link.hero.to_dict(&inner.nested("hero")));
                    }
                    Value::Object(item)
                })
                .collect();
            map.insert("hero_powers".into(), Value::Array(items));
        }
        if rules.includes("heroes") {
            let heroes = self.heroes().map(|h| h.to_dict(&Rules::none())).collect();
            map.insert("heroes".into(), Value::Array(heroes));
        }
        Value::Object(map)
    }
}
