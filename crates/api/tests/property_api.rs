//! HTTP-level integration tests for public property browsing, interest
//! marking and testimonials.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_property, create_user, delete_auth, get, get_auth, post_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_cities(pool: PgPool) {
    create_property(&pool, "A", "pune").await;
    create_property(&pool, "B", "delhi").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/cities").await).await;
    let names: Vec<&str> = json["cities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["delhi", "pune"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_city_is_case_insensitive(pool: PgPool) {
    create_property(&pool, "Sunrise PG", "delhi").await;
    create_property(&pool, "Elsewhere", "pune").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/properties?city=%20Delhi%20").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["city"]["name"], "delhi");
    let properties = json["properties"].as_array().unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0]["name"], "Sunrise PG");
    assert_eq!(properties[0]["interested_count"], 0);
    assert_eq!(properties[0]["user_interested"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_requires_city(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/properties").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_city_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/properties?city=atlantis").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "City 'atlantis' not found");
}

/// Marking twice keeps one entry; the caller's flag shows in listings.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_interest_is_idempotent(pool: PgPool) {
    let (_user, token) = create_user(&pool, "alice@test.com", false).await;
    let property = create_property(&pool, "Sunrise PG", "delhi").await;
    let uri = format!("/api/properties/{}/interested", property.id);

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(app, &uri, json!({}), &token).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["interested_count"], 1);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/properties?city=delhi", &token).await).await;
    assert_eq!(json["properties"][0]["user_interested"], true);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/properties?city=delhi").await).await;
    assert_eq!(json["properties"][0]["user_interested"], false);
    assert_eq!(json["properties"][0]["interested_count"], 1);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["interested_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_interest_on_missing_property_is_404(pool: PgPool) {
    let (_user, token) = create_user(&pool, "alice@test.com", false).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/properties/12345/interested", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Submitted testimonials stay hidden until approved.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_testimonial_moderation_flow(pool: PgPool) {
    let (user, token) = create_user(&pool, "alice@test.com", false).await;
    let (_admin, admin_token) = create_user(&pool, "admin@test.com", true).await;
    let property = create_property(&pool, "Sunrise PG", "delhi").await;
    let uri = format!("/api/properties/{}/testimonials", property.id);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &uri, json!({ "content": "  Great food!  " }), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["testimonial"]["status"], "pending");
    assert_eq!(json["testimonial"]["content"], "Great food!");
    assert_eq!(json["testimonial"]["user_name"], user.full_name);
    let testimonial_id = json["testimonial"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &uri).await).await;
    assert!(json["testimonials"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool.clone());
    let response = common::put_json_auth(
        app,
        &format!("/api/admin/testimonials/{testimonial_id}"),
        json!({ "status": "approved" }),
        &admin_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["testimonials"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/properties/{}", property.id)).await).await;
    assert_eq!(json["testimonials"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_short_testimonial_rejected(pool: PgPool) {
    let (_user, token) = create_user(&pool, "alice@test.com", false).await;
    let property = create_property(&pool, "Sunrise PG", "delhi").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/properties/{}/testimonials", property.id),
        json!({ "content": "ok" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_property_detail(pool: PgPool) {
    let (_user, token) = create_user(&pool, "alice@test.com", false).await;
    let property = create_property(&pool, "Sunrise PG", "delhi").await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        &format!("/api/properties/{}/interested", property.id),
        json!({}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/properties/{}", property.id), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["property"]["name"], "Sunrise PG");
    assert_eq!(json["property"]["city_name"], "delhi");
    assert_eq!(json["property"]["images"], json!(["1.jpg"]));
    assert_eq!(json["interested_count"], 1);
    assert_eq!(json["user_interested"], true);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/properties/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
