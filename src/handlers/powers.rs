//! Power handlers: list, read and the allow-listed update.

use super::{parse_id, IncludeParams};
use crate::error::AppError;
use crate::extractors::{ApiQuery, JsonObject};
use crate::serialize::{Rules, ToDict, POWER_PATHS};
use crate::service::{PowerService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let powers = PowerService::list(&state.pool).await?;
    Ok(Json(powers.iter().map(|p| p.to_dict(&Rules::none())).collect()))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ApiQuery(params): ApiQuery<IncludeParams>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id_str, "Power")?;
    let rules = match params.include.as_deref() {
        Some(raw) => Rules::parse(raw, POWER_PATHS)?,
        None => Rules::none(),
    };
    let power = PowerService::read_graph(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Power"))?;
    Ok(Json(power.to_dict(&rules)))
}

/// Apply `name`/`description` from the body. Nothing is written unless every change validates.
/// A missing power is reported before the body is looked at.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<JsonObject, AppError>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id_str, "Power")?;
    let mut power = PowerService::read(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Power"))?;
    let JsonObject(body) = body?;
    let changes = RequestValidator::power_changes(body)?;
    power.apply(changes)?;
    let power = PowerService::update(&state.pool, &power)
        .await?
        .ok_or(AppError::NotFound("Power"))?;
    Ok(Json(power.to_dict(&Rules::none())))
}
