//! Response body helpers.

use serde::Serialize;

/// Single error, used for not-found and server failures: `{"error": "..."}`.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

/// Error list, used for rejected writes: `{"errors": ["..."]}`.
#[derive(Serialize, Debug)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

pub fn error_body(message: String) -> ErrorBody {
    ErrorBody { error: message }
}

pub fn errors_body(messages: Vec<String>) -> ErrorsBody {
    ErrorsBody { errors: messages }
}
