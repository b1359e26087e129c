//! Repository for the `ratings` table and the property rating means.

use pglife_core::rating::{compute_averages, RatingScores};
use pglife_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::{AggregatedRating, Rating};

const COLUMNS: &str = "id, property_id, user_id, rating_clean, rating_food, rating_safety, \
    created_at, updated_at";

/// Provides the rating upsert and mean recomputation.
pub struct RatingRepo;

impl RatingRepo {
    /// Store `user_id`'s scores for `property_id` and refresh the property's means.
    ///
    /// Runs in one transaction holding the property row lock: upsert the
    /// rating, re-read every score for the property, recompute the means and
    /// write them back. Returns `None` when the property does not exist, in
    /// which case nothing is written.
    pub async fn submit_and_aggregate(
        pool: &PgPool,
        property_id: DbId,
        user_id: DbId,
        scores: &RatingScores,
    ) -> Result<Option<AggregatedRating>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM properties WHERE id = $1 FOR UPDATE")
                .bind(property_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let upsert = format!(
            "INSERT INTO ratings (property_id, user_id, rating_clean, rating_food, rating_safety)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT ON CONSTRAINT uq_ratings_property_user DO UPDATE SET
                rating_clean = EXCLUDED.rating_clean,
                rating_food = EXCLUDED.rating_food,
                rating_safety = EXCLUDED.rating_safety
             RETURNING {COLUMNS}"
        );
        let rating = sqlx::query_as::<_, Rating>(&upsert)
            .bind(property_id)
            .bind(user_id)
            .bind(scores.rating_clean)
            .bind(scores.rating_food)
            .bind(scores.rating_safety)
            .fetch_one(&mut *tx)
            .await?;

        let all: Vec<(f64, f64, f64)> = sqlx::query_as(
            "SELECT rating_clean, rating_food, rating_safety FROM ratings WHERE property_id = $1",
        )
        .bind(property_id)
        .fetch_all(&mut *tx)
        .await?;
        let all: Vec<RatingScores> = all
            .into_iter()
            .map(|(rating_clean, rating_food, rating_safety)| RatingScores {
                rating_clean,
                rating_food,
                rating_safety,
            })
            .collect();

        // The upserted row is visible inside this transaction, so `all` is non-empty.
        let averages = compute_averages(&all).ok_or(sqlx::Error::RowNotFound)?;

        sqlx::query(
            "UPDATE properties SET rating_clean = $2, rating_food = $3, rating_safety = $4
             WHERE id = $1",
        )
        .bind(property_id)
        .bind(averages.clean)
        .bind(averages.food)
        .bind(averages.safety)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(AggregatedRating { rating, averages }))
    }

    /// Find the rating a user gave a property.
    pub async fn find(
        pool: &PgPool,
        property_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Rating>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM ratings WHERE property_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Rating>(&query)
            .bind(property_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Number of ratings stored for a property.
    pub async fn count_for_property(pool: &PgPool, property_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM ratings WHERE property_id = $1")
            .bind(property_id)
            .fetch_one(pool)
            .await
    }
}
