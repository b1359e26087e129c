//! Booking request validation and stay-interval arithmetic.
//!
//! A booking occupies the half-open interval `[move_in, move_out)`, where
//! `move_out` is `move_in` plus a whole number of calendar months. Two stays
//! overlap only when they share at least one day: a stay ending on the day
//! another begins does not conflict.

use chrono::{DateTime, Months, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;
use crate::types::{Date, DbId};

/* --------------------------------------------------------------------------
Status constants
-------------------------------------------------------------------------- */

pub const BOOKING_STATUS_PENDING: &str = "pending";
pub const BOOKING_STATUS_CONFIRMED: &str = "confirmed";
pub const BOOKING_STATUS_CANCELLED: &str = "cancelled";

/// Only non-cancelled bookings hold their dates.
pub fn status_blocks_dates(status: &str) -> bool {
    status != BOOKING_STATUS_CANCELLED
}

/* --------------------------------------------------------------------------
Stay interval
-------------------------------------------------------------------------- */

/// A half-open `[move_in, move_out)` date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayInterval {
    pub move_in: Date,
    pub move_out: Date,
}

impl StayInterval {
    /// Build the interval for a stay of `duration_months` starting at `move_in`.
    pub fn for_duration(move_in: Date, duration_months: i32) -> Result<Self, CoreError> {
        let move_out = move_out_date(move_in, duration_months)?;
        Ok(Self { move_in, move_out })
    }

    /// Half-open overlap test. Shared endpoints do not count.
    pub fn overlaps(&self, other: &StayInterval) -> bool {
        self.move_in < other.move_out && other.move_in < self.move_out
    }
}

/// Add `duration_months` calendar months to `move_in`.
///
/// The day-of-month is kept when the target month has it; otherwise it is
/// clamped to that month's last day (`2024-01-31` + 1 month = `2024-02-29`).
pub fn move_out_date(move_in: Date, duration_months: i32) -> Result<Date, CoreError> {
    let months = u32::try_from(duration_months)
        .ok()
        .filter(|m| *m >= 1)
        .ok_or_else(|| {
            CoreError::Validation("Duration must be at least 1 month".to_string())
        })?;

    move_in
        .checked_add_months(Months::new(months))
        .ok_or_else(|| CoreError::Validation("Duration is out of range".to_string()))
}

/// Reject move-in dates strictly before `today`.
pub fn ensure_not_in_past(move_in: Date, today: Date) -> Result<(), CoreError> {
    if move_in < today {
        return Err(CoreError::Validation(
            "Booking date cannot be in the past".to_string(),
        ));
    }
    Ok(())
}

/// Parse a move-in date and drop any time-of-day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date is taken in the
/// timestamp's own offset), and offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`.
pub fn parse_move_in_date(raw: &str) -> Result<Date, CoreError> {
    let raw = raw.trim();

    if let Ok(date) = Date::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }

    Err(CoreError::Validation(format!(
        "Invalid move-in date '{raw}'. Expected an ISO date"
    )))
}

/* --------------------------------------------------------------------------
Request validation
-------------------------------------------------------------------------- */

/// Raw booking request as submitted by the client.
///
/// Every field is optional at the wire level so that a missing field yields a
/// validation error instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub property_id: Option<DbId>,
    pub move_in_date: Option<String>,
    pub duration: Option<i32>,
    pub number_of_people: Option<i32>,
    pub special_requests: Option<String>,
    pub total_amount: Option<f64>,
}

/// A validated booking, ready for the conflict check and insert.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPlan {
    pub property_id: DbId,
    pub stay: StayInterval,
    pub duration_months: i32,
    pub number_of_people: i32,
    pub special_requests: Option<String>,
    pub total_amount: f64,
}

impl BookingRequest {
    /// Validate the request against `today` and compute the stay interval.
    ///
    /// Checks run in order: required fields, numeric ranges, past date,
    /// move-out computation. The property's existence and date availability
    /// are checked later, against storage.
    pub fn plan(&self, today: Date) -> Result<BookingPlan, CoreError> {
        let (Some(property_id), Some(move_in_raw), Some(duration), Some(people), Some(amount)) = (
            self.property_id,
            self.move_in_date.as_deref(),
            self.duration,
            self.number_of_people,
            self.total_amount,
        ) else {
            return Err(CoreError::Validation("Missing required fields".to_string()));
        };

        if duration < 1 {
            return Err(CoreError::Validation(
                "Duration must be at least 1 month".to_string(),
            ));
        }
        if people < 1 {
            return Err(CoreError::Validation(
                "Number of people must be at least 1".to_string(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::Validation(
                "Total amount must be a positive number".to_string(),
            ));
        }

        let move_in = parse_move_in_date(move_in_raw)?;
        ensure_not_in_past(move_in, today)?;
        let stay = StayInterval::for_duration(move_in, duration)?;

        let special_requests = self
            .special_requests
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(BookingPlan {
            property_id,
            stay,
            duration_months: duration,
            number_of_people: people,
            special_requests,
            total_amount: amount,
        })
    }
}

/// Accept ids as JSON numbers or numeric strings.
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(DbId),
        Str(String),
    }

    match Option::<IdRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdRepr::Num(id)) => Ok(Some(id)),
        Some(IdRepr::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IdRepr::Str(s)) => s
            .trim()
            .parse::<DbId>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{s}'"))),
    }
}
