//! Superhero API: heroes, powers and the hero_powers that link them, over HTTP/JSON on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod serialize;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, ValidationError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes_with_ready};
pub use serialize::{Rules, ToDict};
pub use service::{HeroPowerService, HeroService, PowerService};
pub use state::AppState;
pub use store::connect;
