//! Interest marker model: a user watching a property.

use pglife_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `interested` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interested {
    pub id: DbId,
    pub property_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An interest entry joined with user and property details (admin view).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InterestedDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub interested: Interested,
    pub user_full_name: String,
    pub user_email: String,
    pub property_name: String,
    pub property_address: String,
}
