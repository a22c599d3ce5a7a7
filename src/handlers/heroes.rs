//! Hero handlers: list and read.

use super::{parse_id, IncludeParams};
use crate::error::AppError;
use crate::extractors::ApiQuery;
use crate::serialize::{Rules, ToDict, HERO_PATHS};
use crate::service::HeroService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

/// Relationships a single hero carries when the client does not ask for others.
pub const DEFAULT_HERO_PATHS: [&str; 2] = ["hero_powers", "hero_powers.power"];

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let heroes = HeroService::list(&state.pool).await?;
    Ok(Json(heroes.iter().map(|h| h.to_dict(&Rules::none())).collect()))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ApiQuery(params): ApiQuery<IncludeParams>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id_str, "Hero")?;
    let rules = match params.include.as_deref() {
        Some(raw) => Rules::parse(raw, HERO_PATHS)?,
        None => Rules::new(DEFAULT_HERO_PATHS),
    };
    let hero = HeroService::read_graph(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Hero"))?;
    Ok(Json(hero.to_dict(&rules)))
}
