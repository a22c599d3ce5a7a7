mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_index_is_html_welcome() {
    let (app, _pool) = setup_app().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>Welcome to the Superhero API</h1>");
}

#[tokio::test]
async fn test_list_heroes_empty() {
    let (app, _pool) = setup_app().await;
    let (status, body) = get_json(&app, "/heroes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_heroes_columns_only() {
    let (app, pool) = setup_app().await;
    let kamala = add_hero(&pool, "Kamala Khan", "Ms. Marvel").await;
    let doreen = add_hero(&pool, "Doreen Green", "Squirrel Girl").await;
    let flight = add_power(&pool, "flight", FLIGHT_DESCRIPTION).await;
    link(&pool, "Strong", kamala.id, flight.id).await;

    let (status, body) = get_json(&app, "/heroes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": kamala.id, "name": "Kamala Khan", "super_name": "Ms. Marvel"},
            {"id": doreen.id, "name": "Doreen Green", "super_name": "Squirrel Girl"}
        ])
    );
}

#[tokio::test]
async fn test_get_hero_with_nested_powers() {
    let (app, pool) = setup_app().await;
    let kamala = add_hero(&pool, "Kamala Khan", "Ms. Marvel").await;
    let flight = add_power(&pool, "flight", FLIGHT_DESCRIPTION).await;
    link(&pool, "Average", kamala.id, flight.id).await;

    let (status, body) = get_json(&app, &format!("/heroes/{}", kamala.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Kamala Khan");
    assert_eq!(body["super_name"], "Ms. Marvel");
    let hero_powers = body["hero_powers"].as_array().unwrap();
    assert_eq!(hero_powers.len(), 1);
    assert_eq!(hero_powers[0]["strength"], "Average");
    assert_eq!(hero_powers[0]["hero_id"], kamala.id);
    assert_eq!(
        hero_powers[0]["power"],
        json!({"id": flight.id, "name": "flight", "description": FLIGHT_DESCRIPTION})
    );
    // No cycle back to the hero.
    assert!(hero_powers[0].get("hero").is_none());
    assert!(body.get("powers").is_none());
}

#[tokio::test]
async fn test_get_hero_without_powers_has_empty_list() {
    let (app, pool) = setup_app().await;
    let hero = add_hero(&pool, "Gwen Stacy", "Spider-Gwen").await;
    let (status, body) = get_json(&app, &format!("/heroes/{}", hero.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hero_powers"], json!([]));
}

#[tokio::test]
async fn test_get_hero_include_override() {
    let (app, pool) = setup_app().await;
    let hero = add_hero(&pool, "Ororo Munroe", "Storm").await;
    let flight = add_power(&pool, "flight", FLIGHT_DESCRIPTION).await;
    link(&pool, "Strong", hero.id, flight.id).await;

    let (status, body) = get_json(&app, &format!("/heroes/{}?include=powers", hero.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("hero_powers").is_none());
    assert_eq!(body["powers"][0]["name"], "flight");

    let (status, body) = get_json(&app, &format!("/heroes/{}?include=heroes", hero.id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["Unknown include path: heroes"]}));
}

#[tokio::test]
async fn test_get_hero_not_found() {
    let (app, _pool) = setup_app().await;
    let (status, body) = get_json(&app, "/heroes/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Hero not found"}));

    let (status, body) = get_json(&app, "/heroes/not-a-number").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Hero not found"}));
}

#[tokio::test]
async fn test_get_hero_malformed_query_is_json_error() {
    let (app, pool) = setup_app().await;
    let hero = add_hero(&pool, "Kitty Pryde", "Shadowcat").await;

    let uri = format!("/heroes/{}?include=powers&include=hero_powers", hero.id);
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("duplicate field"));
}
