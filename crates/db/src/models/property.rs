//! Property entity model and DTOs.

use pglife_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A property row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub gender: String,
    pub rent: f64,
    pub city_id: DbId,
    pub rating_clean: f64,
    pub rating_food: f64,
    pub rating_safety: f64,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A property joined with its city name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyWithCity {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub city_name: String,
}

/// A property as shown in city listings, with interest figures for the caller.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub city_name: String,
    pub interested_count: i64,
    /// Always `false` for anonymous callers.
    pub user_interested: bool,
}

/// DTO for creating a new property. The city is resolved to an id beforehand.
#[derive(Debug, Clone)]
pub struct CreateProperty {
    pub name: String,
    pub address: String,
    pub gender: String,
    pub rent: f64,
    pub city_id: DbId,
    pub images: Vec<String>,
}

/// DTO for updating a property. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateProperty {
    pub name: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub rent: Option<f64>,
    pub city_id: Option<DbId>,
    pub images: Option<Vec<String>>,
}

/// Admin request body shared by property create and update.
///
/// On create every field except `images` is required; on update every field
/// is optional and only provided ones are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub rent: Option<f64>,
    pub city_name: Option<String>,
    pub images: Option<Vec<String>>,
}
