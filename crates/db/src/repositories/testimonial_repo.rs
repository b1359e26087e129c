//! Repository for the `testimonials` table.

use pglife_core::testimonial::TESTIMONIAL_STATUS_APPROVED;
use pglife_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialDetail, UpdateTestimonial,
};

const COLUMNS: &str =
    "id, property_id, user_id, user_name, content, status, created_at, updated_at";

const T_COLUMNS: &str = "t.id, t.property_id, t.user_id, t.user_name, t.content, t.status, \
    t.created_at, t.updated_at";

/// Provides CRUD and moderation queries for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a testimonial. It starts in the `pending` state.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (property_id, user_id, user_name, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(input.property_id)
            .bind(input.user_id)
            .bind(&input.user_name)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List every testimonial of a property regardless of status, newest first.
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials
             WHERE property_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }

    /// List approved testimonials for a property, newest first.
    pub async fn list_approved_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials
             WHERE property_id = $1 AND status = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(property_id)
            .bind(TESTIMONIAL_STATUS_APPROVED)
            .fetch_all(pool)
            .await
    }

    /// List every testimonial with property and author details, newest first.
    pub async fn list_all_detail(pool: &PgPool) -> Result<Vec<TestimonialDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {T_COLUMNS},
                p.name AS property_name,
                u.full_name AS user_full_name,
                u.email AS user_email,
                u.avatar_url AS user_avatar_url
             FROM testimonials t
             JOIN properties p ON p.id = t.property_id
             JOIN users u ON u.id = t.user_id
             ORDER BY t.created_at DESC, t.id DESC"
        );
        sqlx::query_as::<_, TestimonialDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update content and/or status. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                content = COALESCE($2, content),
                status = COALESCE($3, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
