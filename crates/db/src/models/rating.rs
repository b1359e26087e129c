//! Rating entity model.

use pglife_core::rating::{RatingAverages, RatingScores};
use pglife_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `ratings` table. One per (property, user).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub property_id: DbId,
    pub user_id: DbId,
    pub rating_clean: f64,
    pub rating_food: f64,
    pub rating_safety: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Rating {
    pub fn scores(&self) -> RatingScores {
        RatingScores {
            rating_clean: self.rating_clean,
            rating_food: self.rating_food,
            rating_safety: self.rating_safety,
        }
    }
}

/// Outcome of a rating submission: the stored rating and the property's new means.
#[derive(Debug, Clone)]
pub struct AggregatedRating {
    pub rating: Rating,
    pub averages: RatingAverages,
}
