//! Repository for the `interested` table.

use pglife_core::types::DbId;
use sqlx::PgPool;

use crate::models::interested::InterestedDetail;
use crate::models::property::PropertyWithCity;

/// Provides interest marking and the listings built on it.
pub struct InterestedRepo;

impl InterestedRepo {
    /// Mark `user_id` as interested in `property_id`.
    ///
    /// Idempotent: returns `true` only when a new marker was written.
    pub async fn mark(
        pool: &PgPool,
        property_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO interested (property_id, user_id) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_interested_property_user DO NOTHING",
        )
        .bind(property_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove the caller's marker. Returns `true` if one existed.
    pub async fn unmark(
        pool: &PgPool,
        property_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interested WHERE property_id = $1 AND user_id = $2")
            .bind(property_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of users interested in a property.
    pub async fn count_for_property(pool: &PgPool, property_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM interested WHERE property_id = $1")
            .bind(property_id)
            .fetch_one(pool)
            .await
    }

    /// Whether `user_id` has marked `property_id`.
    pub async fn exists(
        pool: &PgPool,
        property_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM interested WHERE property_id = $1 AND user_id = $2)",
        )
        .bind(property_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// The properties a user has marked, most recently marked first.
    pub async fn list_properties_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PropertyWithCity>, sqlx::Error> {
        sqlx::query_as::<_, PropertyWithCity>(
            "SELECT p.id, p.name, p.address, p.gender, p.rent, p.city_id,
                p.rating_clean, p.rating_food, p.rating_safety, p.images,
                p.created_at, p.updated_at, c.name AS city_name
             FROM interested i
             JOIN properties p ON p.id = i.property_id
             JOIN cities c ON c.id = p.city_id
             WHERE i.user_id = $1
             ORDER BY i.created_at DESC, i.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Every interest marker with user and property details (admin view).
    pub async fn list_all_detail(pool: &PgPool) -> Result<Vec<InterestedDetail>, sqlx::Error> {
        sqlx::query_as::<_, InterestedDetail>(
            "SELECT i.id, i.property_id, i.user_id, i.created_at, i.updated_at,
                u.full_name AS user_full_name,
                u.email AS user_email,
                p.name AS property_name,
                p.address AS property_address
             FROM interested i
             JOIN users u ON u.id = i.user_id
             JOIN properties p ON p.id = i.property_id
             ORDER BY i.created_at DESC, i.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a marker by its own ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM interested WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
