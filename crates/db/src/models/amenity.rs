//! Amenity entity model and DTOs.

use pglife_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An amenity row from the `amenities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Amenity {
    pub id: DbId,
    pub property_id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub amenity_type: String,
    pub icon: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An amenity joined with the name and address of its property.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AmenityWithProperty {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub amenity: Amenity,
    pub property_name: String,
    pub property_address: String,
}

/// DTO for creating a new amenity.
#[derive(Debug, Clone)]
pub struct CreateAmenity {
    pub property_id: DbId,
    pub name: String,
    pub amenity_type: String,
    pub icon: Option<String>,
}

/// DTO for updating an amenity. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAmenity {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub amenity_type: Option<String>,
    pub icon: Option<String>,
    pub property_id: Option<DbId>,
}
