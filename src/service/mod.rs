//! Record services and request validation.

mod crud;
mod validation;
pub use crud::{HeroPowerService, HeroService, PowerService};
pub use validation::RequestValidator;
