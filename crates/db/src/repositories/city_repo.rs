//! Repository for the `cities` table.

use sqlx::PgPool;

use crate::models::city::City;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides lookup and find-or-create for cities.
pub struct CityRepo;

impl CityRepo {
    /// List all cities ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities ORDER BY name");
        sqlx::query_as::<_, City>(&query).fetch_all(pool).await
    }

    /// Find a city by its normalized (trimmed, lowercase) name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE name = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Return the city with this normalized name, creating it if absent.
    ///
    /// Concurrent callers with the same name converge on one row.
    pub async fn find_or_create(pool: &PgPool, name: &str) -> Result<City, sqlx::Error> {
        let query = format!(
            "INSERT INTO cities (name) VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_cities_name DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
