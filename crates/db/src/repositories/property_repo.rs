//! Repository for the `properties` table.

use pglife_core::types::DbId;
use sqlx::PgPool;

use crate::models::property::{
    CreateProperty, Property, PropertyListing, PropertyWithCity, UpdateProperty,
};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

const COLUMNS: &str = "id, name, address, gender, rent, city_id, \
    rating_clean, rating_food, rating_safety, images, created_at, updated_at";

/// The same columns qualified with the `p` alias, for joins.
const P_COLUMNS: &str = "p.id, p.name, p.address, p.gender, p.rent, p.city_id, \
    p.rating_clean, p.rating_food, p.rating_safety, p.images, p.created_at, p.updated_at";

/// Tables whose rows reference a property and go with it on delete.
const DEPENDENT_TABLES: [&str; 5] = [
    "amenities",
    "testimonials",
    "interested",
    "ratings",
    "bookings",
];

/// Provides CRUD operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties (name, address, gender, rent, city_id, images)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.gender)
            .bind(input.rent)
            .bind(input.city_id)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find a property by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a property by ID together with its city name.
    pub async fn find_with_city(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PropertyWithCity>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, c.name AS city_name
             FROM properties p
             JOIN cities c ON c.id = p.city_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PropertyWithCity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every property with its city name, newest first (admin view).
    pub async fn list_with_city(pool: &PgPool) -> Result<Vec<PropertyWithCity>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, c.name AS city_name
             FROM properties p
             JOIN cities c ON c.id = p.city_id
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PropertyWithCity>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the properties of one city with interest figures.
    ///
    /// `user_interested` is computed for `viewer_id`; with `None` it is
    /// always `false`.
    pub async fn list_by_city(
        pool: &PgPool,
        city_id: DbId,
        viewer_id: Option<DbId>,
    ) -> Result<Vec<PropertyListing>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS}, c.name AS city_name,
                (SELECT COUNT(*) FROM interested i WHERE i.property_id = p.id) AS interested_count,
                EXISTS (
                    SELECT 1 FROM interested i
                    WHERE i.property_id = p.id AND i.user_id = $2
                ) AS user_interested
             FROM properties p
             JOIN cities c ON c.id = p.city_id
             WHERE p.city_id = $1
             ORDER BY p.id"
        );
        sqlx::query_as::<_, PropertyListing>(&query)
            .bind(city_id)
            .bind(viewer_id)
            .fetch_all(pool)
            .await
    }

    /// Update a property. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                gender = COALESCE($4, gender),
                rent = COALESCE($5, rent),
                city_id = COALESCE($6, city_id),
                images = COALESCE($7, images)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.gender)
            .bind(input.rent)
            .bind(input.city_id)
            .bind(&input.images)
            .fetch_optional(pool)
            .await
    }

    /// Delete a property and every row that references it, in one transaction.
    ///
    /// Returns `true` if the property existed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for table in DEPENDENT_TABLES {
            sqlx::query(&format!("DELETE FROM {table} WHERE property_id = $1"))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
