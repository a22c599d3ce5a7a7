//! HTTP handlers for the index page, heroes, powers and hero_powers.

pub mod hero_powers;
pub mod heroes;
pub mod index;
pub mod powers;

use crate::error::AppError;
use serde::Deserialize;

/// `?include=a,b.c` on single-record reads.
#[derive(Debug, Default, Deserialize)]
pub struct IncludeParams {
    pub include: Option<String>,
}

/// Path ids that are not integers address nothing, so they read as not found.
fn parse_id(id_str: &str, entity: &'static str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::NotFound(entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_not_found_on_garbage() {
        assert_eq!(parse_id("42", "Hero").unwrap(), 42);
        assert!(matches!(parse_id("abc", "Hero"), Err(AppError::NotFound("Hero"))));
    }
}
