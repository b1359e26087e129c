//! HTTP-level integration tests for self-service profile routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_property, create_user, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_own_profile(pool: PgPool) {
    let (user, token) = create_user(&pool, "alice@test.com", false).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/users/{}", user.id), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "alice@test.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_profile_is_forbidden(pool: PgPool) {
    let (_alice, token) = create_user(&pool, "alice@test.com", false).await;
    let (bob, _) = create_user(&pool, "bob@test.com", false).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/users/{}", bob.id), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/users/{}", bob.id),
        json!({ "full_name": "Hijacked" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_partial(pool: PgPool) {
    let (user, token) = create_user(&pool, "alice@test.com", false).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/users/{}", user.id),
        json!({ "college_name": "  DU  " }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["college_name"], "DU");
    assert_eq!(json["user"]["full_name"], user.full_name);
    assert_eq!(json["user"]["phone"], user.phone);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_rejects_blank(pool: PgPool) {
    let (user, token) = create_user(&pool, "alice@test.com", false).await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/users/{}", user.id),
        json!({ "full_name": "   " }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_interested_properties(pool: PgPool) {
    let (user, token) = create_user(&pool, "alice@test.com", false).await;
    let liked = create_property(&pool, "Liked PG", "delhi").await;
    create_property(&pool, "Other PG", "delhi").await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        &format!("/api/properties/{}/interested", liked.id),
        json!({}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/users/{}/interested", user.id), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let properties = json["properties"].as_array().unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0]["id"], liked.id);
    assert_eq!(properties[0]["city_name"], "delhi");
}
