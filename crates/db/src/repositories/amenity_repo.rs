//! Repository for the `amenities` table.

use pglife_core::types::DbId;
use sqlx::PgPool;

use crate::models::amenity::{Amenity, AmenityWithProperty, CreateAmenity, UpdateAmenity};

const COLUMNS: &str = "id, property_id, name, amenity_type, icon, created_at, updated_at";

/// Provides CRUD operations for amenities.
pub struct AmenityRepo;

impl AmenityRepo {
    /// Insert a new amenity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAmenity) -> Result<Amenity, sqlx::Error> {
        let query = format!(
            "INSERT INTO amenities (property_id, name, amenity_type, icon)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(input.property_id)
            .bind(&input.name)
            .bind(&input.amenity_type)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// List a property's amenities grouped by type.
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<Amenity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM amenities WHERE property_id = $1 ORDER BY amenity_type, id"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(property_id)
            .fetch_all(pool)
            .await
    }

    /// List every amenity with its property's name and address.
    pub async fn list_all_with_property(
        pool: &PgPool,
    ) -> Result<Vec<AmenityWithProperty>, sqlx::Error> {
        let query = "SELECT a.id, a.property_id, a.name, a.amenity_type, a.icon, \
                a.created_at, a.updated_at, \
                p.name AS property_name, p.address AS property_address
             FROM amenities a
             JOIN properties p ON p.id = a.property_id
             ORDER BY a.created_at DESC, a.id DESC";
        sqlx::query_as::<_, AmenityWithProperty>(query)
            .fetch_all(pool)
            .await
    }

    /// Update an amenity. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAmenity,
    ) -> Result<Option<Amenity>, sqlx::Error> {
        let query = format!(
            "UPDATE amenities SET
                name = COALESCE($2, name),
                amenity_type = COALESCE($3, amenity_type),
                icon = COALESCE($4, icon),
                property_id = COALESCE($5, property_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amenity>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.amenity_type)
            .bind(&input.icon)
            .bind(input.property_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an amenity. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM amenities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
