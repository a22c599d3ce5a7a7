//! Request body checks: shape and allow-lists. Field values are validated by the model.

use crate::error::AppError;
use crate::model::{NewHeroPower, PowerChanges};
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Allow-listed PATCH body for a power. Unknown keys and non-string values are rejected.
    pub fn power_changes(body: Map<String, Value>) -> Result<PowerChanges, AppError> {
        let mut changes = PowerChanges::default();
        for (key, value) in body {
            match key.as_str() {
                "name" => changes.name = Some(string_field(&key, value)?),
                "description" => changes.description = Some(string_field(&key, value)?),
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "Field cannot be updated: {} (allowed: {})",
                        key,
                        PowerChanges::FIELDS.join(", ")
                    )))
                }
            }
        }
        Ok(changes)
    }

    /// POST body for a hero_power: `strength`, `hero_id`, `power_id`, all required.
    pub fn new_hero_power(body: &Map<String, Value>) -> Result<NewHeroPower, AppError> {
        let strength = match required(body, "strength")? {
            Value::String(s) => s.as_str(),
            _ => return Err(AppError::BadRequest("strength must be a string".into())),
        };
        let hero_id = integer_field(body, "hero_id")?;
        let power_id = integer_field(body, "power_id")?;
        Ok(NewHeroPower::new(strength, hero_id, power_id)?)
    }
}

fn required<'a>(body: &'a Map<String, Value>, key: &str) -> Result<&'a Value, AppError> {
    match body.get(key) {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!("Missing required field: {}", key))),
        Some(v) => Ok(v),
    }
}

fn integer_field(body: &Map<String, Value>, key: &str) -> Result<i64, AppError> {
    required(body, key)?
        .as_i64()
        .ok_or_else(|| AppError::BadRequest(format!("{} must be an integer", key)))
}

fn string_field(key: &str, value: Value) -> Result<String, AppError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(AppError::BadRequest(format!("{} must be a string", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::model::Strength;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn power_changes_allow_list() {
        let c = RequestValidator::power_changes(obj(json!({"description": "anything goes here"}))).unwrap();
        assert_eq!(c.description.as_deref(), Some("anything goes here"));
        assert!(c.name.is_none());

        let err = RequestValidator::power_changes(obj(json!({"id": 99}))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m.starts_with("Field cannot be updated: id")));

        let err = RequestValidator::power_changes(obj(json!({"name": 5}))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m == "name must be a string"));

        assert!(RequestValidator::power_changes(Map::new()).unwrap().is_empty());
    }

    #[test]
    fn hero_power_body() {
        let hp = RequestValidator::new_hero_power(&obj(json!({"strength": "Average", "hero_id": 1, "power_id": 2})))
            .unwrap();
        assert_eq!(hp.strength, Strength::Average);
        assert_eq!((hp.hero_id, hp.power_id), (1, 2));
    }

    #[test]
    fn hero_power_body_errors() {
        let err = RequestValidator::new_hero_power(&obj(json!({"strength": "Average", "hero_id": 1}))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m == "Missing required field: power_id"));

        let err = RequestValidator::new_hero_power(&obj(json!({"strength": "Average", "hero_id": "1", "power_id": 2})))
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(m) if m == "hero_id must be an integer"));

        let err = RequestValidator::new_hero_power(&obj(json!({"strength": "Mighty", "hero_id": 1, "power_id": 2})))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::InvalidStrength)));
    }
}
