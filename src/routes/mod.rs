//! Router assembly.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes_with_ready;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: API routes plus health/readiness/version.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes(state.clone()))
        .merge(common_routes_with_ready(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
