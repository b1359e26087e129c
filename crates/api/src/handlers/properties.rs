//! Handlers for the public `/properties` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pglife_core::error::CoreError;
use pglife_core::property::normalize_city_name;
use pglife_core::rating::{RatingAverages, RatingSubmission};
use pglife_core::testimonial::normalize_content;
use pglife_core::types::DbId;
use pglife_db::models::amenity::Amenity;
use pglife_db::models::city::City;
use pglife_db::models::property::{PropertyListing, PropertyWithCity};
use pglife_db::models::testimonial::{CreateTestimonial, Testimonial};
use pglife_db::repositories::{
    AmenityRepo, CityRepo, InterestedRepo, PropertyRepo, RatingRepo, TestimonialRepo, UserRepo,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query string for `GET /properties`.
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CityListingBody {
    pub city: City,
    pub properties: Vec<PropertyListing>,
}

#[derive(Debug, Serialize)]
pub struct PropertyDetailBody {
    pub property: PropertyWithCity,
    pub amenities: Vec<Amenity>,
    pub testimonials: Vec<Testimonial>,
    pub interested_count: i64,
    pub user_interested: bool,
}

#[derive(Debug, Serialize)]
pub struct InterestBody {
    pub interested_count: i64,
    pub user_interested: bool,
}

/// Request body for `POST /properties/{id}/testimonials`.
#[derive(Debug, Deserialize)]
pub struct TestimonialRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TestimonialBody {
    pub testimonial: Testimonial,
}

#[derive(Debug, Serialize)]
pub struct TestimonialsBody {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Serialize)]
pub struct RatingBody {
    pub averages: RatingAverages,
}

// ---------------------------------------------------------------------------
// Browsing
// ---------------------------------------------------------------------------

/// GET /api/properties?city={name}
///
/// Properties of one city. `user_interested` reflects the optional caller.
pub async fn list_by_city(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    AppQuery(query): AppQuery<CityQuery>,
) -> AppResult<Json<ApiResponse<CityListingBody>>> {
    let name = query
        .city
        .as_deref()
        .map(normalize_city_name)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("City is required".into()))?;

    let Some(city) = CityRepo::find_by_name(&state.pool, &name).await? else {
        return Err(AppError::Core(CoreError::NotFoundByName {
            entity: "City",
            name,
        }));
    };

    let properties = PropertyRepo::list_by_city(&state.pool, city.id, viewer.user_id()).await?;
    Ok(Json(ApiResponse::new(CityListingBody { city, properties })))
}

/// GET /api/properties/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<PropertyDetailBody>>> {
    let property = PropertyRepo::find_with_city(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Property", id))?;

    let amenities = AmenityRepo::list_by_property(&state.pool, id).await?;
    let testimonials = TestimonialRepo::list_approved_by_property(&state.pool, id).await?;
    let interested_count = InterestedRepo::count_for_property(&state.pool, id).await?;
    let user_interested = match viewer.user_id() {
        Some(user_id) => InterestedRepo::exists(&state.pool, id, user_id).await?,
        None => false,
    };

    Ok(Json(ApiResponse::new(PropertyDetailBody {
        property,
        amenities,
        testimonials,
        interested_count,
        user_interested,
    })))
}

// ---------------------------------------------------------------------------
// Interest
// ---------------------------------------------------------------------------

/// POST /api/properties/{id}/interested
///
/// Idempotent: marking twice keeps a single entry.
pub async fn mark_interested(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<InterestBody>>> {
    ensure_property_exists(&state, id).await?;

    let created = InterestedRepo::mark(&state.pool, id, auth.user_id).await?;
    let interested_count = InterestedRepo::count_for_property(&state.pool, id).await?;

    let message = if created {
        "Marked as interested"
    } else {
        "Already marked as interested"
    };
    Ok(Json(
        ApiResponse::new(InterestBody {
            interested_count,
            user_interested: true,
        })
        .with_message(message),
    ))
}

/// DELETE /api/properties/{id}/interested
pub async fn unmark_interested(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<InterestBody>>> {
    ensure_property_exists(&state, id).await?;

    InterestedRepo::unmark(&state.pool, id, auth.user_id).await?;
    let interested_count = InterestedRepo::count_for_property(&state.pool, id).await?;

    Ok(Json(
        ApiResponse::new(InterestBody {
            interested_count,
            user_interested: false,
        })
        .with_message("Removed from interested"),
    ))
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

/// POST /api/properties/{id}/testimonials
///
/// Submitted testimonials are `pending` until an admin approves them.
pub async fn submit_testimonial(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<TestimonialRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<TestimonialBody>>)> {
    let content = normalize_content(input.content.as_deref().unwrap_or_default())?;
    ensure_property_exists(&state, id).await?;

    let author = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth.user_id))?;

    let testimonial = TestimonialRepo::create(
        &state.pool,
        &CreateTestimonial {
            property_id: id,
            user_id: author.id,
            user_name: author.full_name,
            content,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::new(TestimonialBody { testimonial })
                .with_message("Testimonial submitted for review"),
        ),
    ))
}

/// GET /api/properties/{id}/testimonials
///
/// Approved testimonials only, newest first.
pub async fn list_testimonials(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<TestimonialsBody>>> {
    ensure_property_exists(&state, id).await?;
    let testimonials = TestimonialRepo::list_approved_by_property(&state.pool, id).await?;
    Ok(Json(ApiResponse::new(TestimonialsBody { testimonials })))
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// POST /api/properties/{id}/rate
///
/// Store the caller's scores (replacing any earlier ones) and return the
/// property's recomputed means.
pub async fn rate(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<RatingSubmission>,
) -> AppResult<Json<ApiResponse<RatingBody>>> {
    let scores = input.into_scores()?;

    let aggregated = RatingRepo::submit_and_aggregate(&state.pool, id, auth.user_id, &scores)
        .await?
        .ok_or(AppError::not_found("Property", id))?;

    tracing::info!(
        property_id = id,
        user_id = auth.user_id,
        clean = aggregated.averages.clean,
        food = aggregated.averages.food,
        safety = aggregated.averages.safety,
        "Rating aggregated"
    );

    Ok(Json(
        ApiResponse::new(RatingBody {
            averages: aggregated.averages,
        })
        .with_message("Rating submitted successfully"),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_property_exists(state: &AppState, id: DbId) -> AppResult<()> {
    PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::not_found("Property", id))
}
