//! Shared fixtures for repository tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use pglife_db::models::booking::CreateBooking;
use pglife_db::models::property::{CreateProperty, Property};
use pglife_db::models::user::{CreateUser, User};
use pglife_db::repositories::{CityRepo, PropertyRepo, UserRepo};
use sqlx::PgPool;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            full_name: "Test User".to_string(),
            phone: "9999999999".to_string(),
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            college_name: "Test College".to_string(),
            gender: "other".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_property(pool: &PgPool, name: &str) -> Property {
    let city = CityRepo::find_or_create(pool, "delhi").await.unwrap();
    PropertyRepo::create(
        pool,
        &CreateProperty {
            name: name.to_string(),
            address: "12 Test Lane".to_string(),
            gender: "unisex".to_string(),
            rent: 8000.0,
            city_id: city.id,
            images: vec![],
        },
    )
    .await
    .unwrap()
}

pub fn booking(user_id: i64, property_id: i64, move_in: NaiveDate, months: u32) -> CreateBooking {
    let move_out = move_in
        .checked_add_months(chrono::Months::new(months))
        .unwrap();
    CreateBooking {
        user_id,
        property_id,
        move_in_date: move_in,
        move_out_date: move_out,
        duration_months: months as i32,
        number_of_people: 1,
        special_requests: None,
        total_amount: 8000.0 * months as f64,
    }
}
