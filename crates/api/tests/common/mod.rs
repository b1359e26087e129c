//! Shared harness for HTTP integration tests.
//!
//! Builds the production router (same middleware stack) over the test
//! database, with a clock frozen at [`TODAY`].

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use pglife_api::auth::jwt::{generate_access_token, JwtConfig};
use pglife_api::auth::password::hash_password;
use pglife_api::config::ServerConfig;
use pglife_api::router::build_app_router;
use pglife_api::state::AppState;
use pglife_core::clock::FixedClock;
use pglife_core::roles::role_for;
use pglife_db::models::property::{CreateProperty, Property};
use pglife_db::models::user::{CreateUser, User};
use pglife_db::repositories::{CityRepo, PropertyRepo, UserRepo};
use sqlx::PgPool;
use tower::ServiceExt;

/// The date every test app believes it is.
pub const TODAY: (i32, u32, u32) = (2024, 1, 1);

/// Password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "secret123";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(TODAY.0, TODAY.1, TODAY.2).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            expiry_mins: 60,
        },
    }
}

/// Build the full application router over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        clock: Arc::new(FixedClock(today())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send a POST with a raw (possibly malformed) body.
pub async fn post_raw_auth(app: Router, uri: &str, raw: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user (admin or not) and mint a token for them.
pub async fn create_user(pool: &PgPool, email: &str, is_admin: bool) -> (User, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            full_name: format!("User {email}"),
            phone: "9876543210".to_string(),
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
            college_name: "Test College".to_string(),
            gender: "female".to_string(),
        },
    )
    .await
    .unwrap();

    if is_admin {
        sqlx::query("UPDATE users SET is_admin = true WHERE id = $1")
            .bind(user.id)
            .execute(pool)
            .await
            .unwrap();
    }

    let token = generate_access_token(user.id, role_for(is_admin), &test_config().jwt).unwrap();
    (user, token)
}

pub async fn create_property(pool: &PgPool, name: &str, city: &str) -> Property {
    let city = CityRepo::find_or_create(pool, city).await.unwrap();
    PropertyRepo::create(
        pool,
        &CreateProperty {
            name: name.to_string(),
            address: format!("{name} Road"),
            gender: "unisex".to_string(),
            rent: 7500.0,
            city_id: city.id,
            images: vec!["1.jpg".to_string()],
        },
    )
    .await
    .unwrap()
}
