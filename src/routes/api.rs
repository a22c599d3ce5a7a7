//! Resource routes.

use crate::handlers::{hero_powers, heroes, index, powers};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/heroes", get(heroes::list))
        .route("/heroes/:id", get(heroes::read))
        .route("/powers", get(powers::list))
        .route("/powers/:id", get(powers::read).patch(powers::update))
        .route("/hero_powers", post(hero_powers::create))
        .with_state(state)
}
