//! Testimonial entity model and DTOs.

use pglife_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A testimonial row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub property_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub content: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A testimonial joined with its property name and author details (admin view).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TestimonialDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub testimonial: Testimonial,
    pub property_name: String,
    pub user_full_name: String,
    pub user_email: String,
    pub user_avatar_url: String,
}

/// DTO for creating a testimonial. New testimonials start as `pending`.
#[derive(Debug, Clone)]
pub struct CreateTestimonial {
    pub property_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub content: String,
}

/// DTO for moderating a testimonial. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTestimonial {
    pub content: Option<String>,
    pub status: Option<String>,
}
