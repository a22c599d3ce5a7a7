//! Index page.

use axum::response::Html;

pub const WELCOME: &str = "<h1>Welcome to the Superhero API</h1>";

pub async fn index() -> Html<&'static str> {
    Html(WELCOME)
}
