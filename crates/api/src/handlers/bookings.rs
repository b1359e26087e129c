//! Handlers for the `/bookings` resource.
//!
//! Booking creation validates the request against the injected clock, then
//! hands the availability check and insert to the repository as one atomic
//! operation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pglife_core::booking::BookingRequest;
use pglife_core::error::CoreError;
use pglife_db::models::booking::{Booking, BookingDetail, BookingOutcome, CreateBooking};
use pglife_db::repositories::BookingRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BookingBody {
    pub booking: Booking,
}

#[derive(Debug, Serialize)]
pub struct BookingsBody {
    pub bookings: Vec<BookingDetail>,
}

/// POST /api/bookings
///
/// Book a stay. Fails with 409 if any active booking of the property shares
/// a day with the requested `[move_in, move_out)` interval.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<BookingRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<BookingBody>>)> {
    let plan = input.plan(state.clock.today())?;

    let create = CreateBooking {
        user_id: auth.user_id,
        property_id: plan.property_id,
        move_in_date: plan.stay.move_in,
        move_out_date: plan.stay.move_out,
        duration_months: plan.duration_months,
        number_of_people: plan.number_of_people,
        special_requests: plan.special_requests,
        total_amount: plan.total_amount,
    };

    match BookingRepo::create_if_available(&state.pool, &create).await? {
        BookingOutcome::Created(booking) => {
            tracing::info!(
                booking_id = booking.id,
                property_id = booking.property_id,
                user_id = booking.user_id,
                move_in = %booking.move_in_date,
                move_out = %booking.move_out_date,
                "Booking created"
            );
            Ok((
                StatusCode::CREATED,
                Json(
                    ApiResponse::new(BookingBody { booking })
                        .with_message("Booking created successfully"),
                ),
            ))
        }
        BookingOutcome::PropertyNotFound => Err(AppError::not_found("Property", plan.property_id)),
        BookingOutcome::Conflict(existing) => {
            tracing::info!(
                property_id = plan.property_id,
                existing_booking_id = existing.id,
                "Booking rejected: overlap"
            );
            Err(AppError::Core(CoreError::Conflict(
                "Property is already booked for the selected dates".into(),
            )))
        }
    }
}

/// GET /api/bookings/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ApiResponse<BookingsBody>>> {
    let bookings = BookingRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(ApiResponse::new(BookingsBody { bookings })))
}
