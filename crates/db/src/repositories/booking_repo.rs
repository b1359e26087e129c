//! Repository for the `bookings` table.

use pglife_core::booking::{BOOKING_STATUS_CANCELLED, BOOKING_STATUS_CONFIRMED};
use pglife_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, BookingDetail, BookingOutcome, CreateBooking};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

const COLUMNS: &str = "id, user_id, property_id, move_in_date, move_out_date, \
    duration_months, number_of_people, special_requests, total_amount, status, \
    created_at, updated_at";

const DETAIL_SELECT: &str = "SELECT b.id, b.user_id, b.property_id, b.move_in_date, \
    b.move_out_date, b.duration_months, b.number_of_people, b.special_requests, \
    b.total_amount, b.status, b.created_at, b.updated_at, \
    p.name AS property_name, u.full_name AS user_full_name, u.email AS user_email \
    FROM bookings b \
    JOIN properties p ON p.id = b.property_id \
    JOIN users u ON u.id = b.user_id";

/// Provides the atomic availability check and booking listings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a confirmed booking if no active booking overlaps its stay.
    ///
    /// The property row is locked `FOR UPDATE` for the duration of the
    /// transaction, so two requests for the same property run the overlap
    /// check and insert one after the other. Overlap is half-open: an
    /// existing stay that ends on the new move-in day does not conflict.
    pub async fn create_if_available(
        pool: &PgPool,
        input: &CreateBooking,
    ) -> Result<BookingOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM properties WHERE id = $1 FOR UPDATE")
                .bind(input.property_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(BookingOutcome::PropertyNotFound);
        }

        let overlap_query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE property_id = $1
               AND status <> $2
               AND move_in_date < $4
               AND move_out_date > $3
             ORDER BY move_in_date
             LIMIT 1"
        );
        let existing = sqlx::query_as::<_, Booking>(&overlap_query)
            .bind(input.property_id)
            .bind(BOOKING_STATUS_CANCELLED)
            .bind(input.move_in_date)
            .bind(input.move_out_date)
            .fetch_optional(&mut *tx)
            .await?;
        if let Some(existing) = existing {
            tx.rollback().await?;
            return Ok(BookingOutcome::Conflict(existing));
        }

        let insert = format!(
            "INSERT INTO bookings
                (user_id, property_id, move_in_date, move_out_date, duration_months,
                 number_of_people, special_requests, total_amount, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&insert)
            .bind(input.user_id)
            .bind(input.property_id)
            .bind(input.move_in_date)
            .bind(input.move_out_date)
            .bind(input.duration_months)
            .bind(input.number_of_people)
            .bind(&input.special_requests)
            .bind(input.total_amount)
            .bind(BOOKING_STATUS_CONFIRMED)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(BookingOutcome::Created(booking))
    }

    /// Find a booking by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A user's bookings, latest move-in first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE b.user_id = $1 ORDER BY b.move_in_date DESC, b.id DESC"
        );
        sqlx::query_as::<_, BookingDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Every booking with property and guest details, newest first.
    pub async fn list_all_detail(pool: &PgPool) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY b.created_at DESC, b.id DESC");
        sqlx::query_as::<_, BookingDetail>(&query)
            .fetch_all(pool)
            .await
    }
}
