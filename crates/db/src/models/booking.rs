//! Booking entity model and DTOs.

use pglife_core::booking::{status_blocks_dates, StayInterval};
use pglife_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bookings` table.
///
/// Serialized in camelCase to match the booking request contract.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub user_id: DbId,
    pub property_id: DbId,
    pub move_in_date: Date,
    pub move_out_date: Date,
    pub duration_months: i32,
    pub number_of_people: i32,
    pub special_requests: Option<String>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Booking {
    /// The `[move_in, move_out)` interval this booking occupies.
    pub fn stay(&self) -> StayInterval {
        StayInterval {
            move_in: self.move_in_date,
            move_out: self.move_out_date,
        }
    }

    /// Whether this booking still holds its dates.
    pub fn is_active(&self) -> bool {
        status_blocks_dates(&self.status)
    }
}

/// A booking joined with property and guest details (listing views).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub booking: Booking,
    pub property_name: String,
    pub user_full_name: String,
    pub user_email: String,
}

/// DTO for inserting a confirmed booking.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub user_id: DbId,
    pub property_id: DbId,
    pub move_in_date: Date,
    pub move_out_date: Date,
    pub duration_months: i32,
    pub number_of_people: i32,
    pub special_requests: Option<String>,
    pub total_amount: f64,
}

/// Result of the atomic availability check and insert.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    /// The booking was stored.
    Created(Booking),
    /// The referenced property does not exist. Nothing was written.
    PropertyNotFound,
    /// An active booking already holds some of the requested dates.
    Conflict(Booking),
}
