//! Hero-power handler: create a link.

use super::heroes::DEFAULT_HERO_PATHS;
use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::serialize::{Rules, ToDict};
use crate::service::{HeroPowerService, HeroService, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// Link a hero to a power and answer with the hero as `GET /heroes/{id}` shows it.
pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<Value>, AppError> {
    let new = RequestValidator::new_hero_power(&body)?;
    let hero_power = HeroPowerService::create(&state.pool, &new).await?;
    let hero = HeroService::read_graph(&state.pool, hero_power.hero_id)
        .await?
        .ok_or(AppError::NotFound("Hero"))?;
    Ok(Json(hero.to_dict(&Rules::new(DEFAULT_HERO_PATHS))))
}
