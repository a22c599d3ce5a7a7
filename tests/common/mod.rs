#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use superhero_api::model::{Hero, NewHero, NewHeroPower, NewPower, Power};
use superhero_api::{apply_migrations, app, connect, AppState, HeroPowerService, HeroService, PowerService, Settings};
use tower::ServiceExt;

pub const FLIGHT_DESCRIPTION: &str = "gives the wielder the ability to fly through the skies at supersonic speed";

pub async fn setup_app() -> (Router, SqlitePool) {
    let pool = connect(&Settings::in_memory()).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    (app(AppState { pool: pool.clone() }), pool)
}

pub async fn add_hero(pool: &SqlitePool, name: &str, super_name: &str) -> Hero {
    HeroService::create(pool, &NewHero::new(name, super_name).unwrap()).await.unwrap()
}

pub async fn add_power(pool: &SqlitePool, name: &str, description: &str) -> Power {
    PowerService::create(pool, &NewPower::new(name, description).unwrap()).await.unwrap()
}

pub async fn link(pool: &SqlitePool, strength: &str, hero_id: i64, power_id: i64) {
    HeroPowerService::create(pool, &NewHeroPower::new(strength, hero_id, power_id).unwrap())
        .await
        .unwrap();
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}
