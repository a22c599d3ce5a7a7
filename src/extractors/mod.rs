pub mod json;
pub mod query;

pub use json::JsonObject;
pub use query::ApiQuery;
