//! Typed errors and HTTP mapping.

use crate::response::{error_body, errors_body};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Rejected field value. The display text is the message sent to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description must be at least {min} characters long")]
    DescriptionTooShort { min: usize },
    #[error("Strength must be one of: 'Strong', 'Weak', or 'Average'")]
    InvalidStrength,
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    InvalidVar { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("migration: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, Json(errors_body(vec![self.to_string()]))).into_response()
            }
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(error_body(self.to_string()))).into_response()
            }
            AppError::Config(_) | AppError::Db(_) | AppError::Migrate(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(error_body("internal server error".into())),
                )
                    .into_response()
            }
        }
    }
}
