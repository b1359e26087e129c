//! Repository for the `users` table.

use pglife_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, phone, email, password_hash, college_name, gender, \
    avatar_url, is_admin, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate email violates `uq_users_email`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (full_name, phone, email, password_hash, college_name, gender)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.full_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.college_name)
            .bind(&input.gender)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email. The caller passes the normalized address.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Update a user's profile. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                full_name = COALESCE($2, full_name),
                phone = COALESCE($3, phone),
                college_name = COALESCE($4, college_name),
                gender = COALESCE($5, gender),
                avatar_url = COALESCE($6, avatar_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.phone)
            .bind(&input.college_name)
            .bind(&input.gender)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user together with their testimonials, interest markers,
    /// ratings and bookings, in one transaction.
    ///
    /// Every property the user rated has its means recomputed from the
    /// remaining ratings (0 when none remain) before the transaction commits.
    /// Returns `true` if the user existed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Same lock the rating aggregator takes, in id order.
        let rated: Vec<DbId> = sqlx::query_scalar(
            "SELECT id FROM properties
             WHERE id IN (SELECT property_id FROM ratings WHERE user_id = $1)
             ORDER BY id
             FOR UPDATE",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        for table in ["testimonials", "interested", "ratings", "bookings"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE user_id = $1"))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        if !rated.is_empty() {
            sqlx::query(
                "UPDATE properties p SET
                    rating_clean = COALESCE(r.clean, 0),
                    rating_food = COALESCE(r.food, 0),
                    rating_safety = COALESCE(r.safety, 0)
                 FROM (
                    SELECT q.id,
                           AVG(ra.rating_clean) AS clean,
                           AVG(ra.rating_food) AS food,
                           AVG(ra.rating_safety) AS safety
                    FROM UNNEST($1::BIGINT[]) AS q(id)
                    LEFT JOIN ratings ra ON ra.property_id = q.id
                    GROUP BY q.id
                 ) r
                 WHERE p.id = r.id",
            )
            .bind(&rated)
            .execute(&mut *tx)
            .await?;
        }

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
