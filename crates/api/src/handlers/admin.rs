//! Handlers for the `/admin` resource.
//!
//! Every handler requires [`RequireAdmin`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pglife_core::amenity::{validate_amenity_icon, validate_amenity_type};
use pglife_core::error::CoreError;
use pglife_core::property::{normalize_city_name, validate_property_gender, validate_rent};
use pglife_core::testimonial::{normalize_content, validate_testimonial_status};
use pglife_core::types::DbId;
use pglife_core::user::validate_user_gender;
use pglife_db::models::amenity::{Amenity, AmenityWithProperty, CreateAmenity, UpdateAmenity};
use pglife_db::models::booking::BookingDetail;
use pglife_db::models::interested::InterestedDetail;
use pglife_db::models::property::{
    CreateProperty, PropertyInput, PropertyWithCity, UpdateProperty,
};
use pglife_db::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialDetail, UpdateTestimonial,
};
use pglife_db::models::user::{UpdateUser, UserResponse};
use pglife_db::repositories::{
    AmenityRepo, BookingRepo, CityRepo, InterestedRepo, PropertyRepo, TestimonialRepo, UserRepo,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::users::non_blank;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{ApiResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct PropertiesBody {
    pub properties: Vec<PropertyWithCity>,
}

#[derive(Debug, Serialize)]
pub struct PropertyBody {
    pub property: PropertyWithCity,
}

#[derive(Debug, Serialize)]
pub struct AdminPropertyDetailBody {
    pub property: PropertyWithCity,
    pub amenities: Vec<Amenity>,
    pub testimonials: Vec<Testimonial>,
}

/// Request body for `POST /admin/properties/{id}/amenities`.
#[derive(Debug, Deserialize)]
pub struct AmenityRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub amenity_type: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AmenityBody {
    pub amenity: Amenity,
}

#[derive(Debug, Serialize)]
pub struct AmenitiesBody {
    pub amenities: Vec<AmenityWithProperty>,
}

/// Request body for `POST /admin/properties/{id}/testimonials`.
#[derive(Debug, Deserialize)]
pub struct AdminTestimonialRequest {
    /// Display name; defaults to the admin's own name.
    pub user_name: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TestimonialBody {
    pub testimonial: Testimonial,
}

#[derive(Debug, Serialize)]
pub struct TestimonialsBody {
    pub testimonials: Vec<TestimonialDetail>,
}

#[derive(Debug, Serialize)]
pub struct UsersBody {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize)]
pub struct UserBody {
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct InterestedBody {
    pub interested: Vec<InterestedDetail>,
}

#[derive(Debug, Serialize)]
pub struct BookingsBody {
    pub bookings: Vec<BookingDetail>,
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

/// GET /api/admin/properties
pub async fn list_properties(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<ApiResponse<PropertiesBody>>> {
    let properties = PropertyRepo::list_with_city(&state.pool).await?;
    Ok(Json(ApiResponse::new(PropertiesBody { properties })))
}

/// POST /api/admin/properties
///
/// The city is looked up by normalized name and created if new.
pub async fn create_property(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppJson(input): AppJson<PropertyInput>,
) -> AppResult<(StatusCode, Json<ApiResponse<PropertyBody>>)> {
    let (Some(name), Some(address), Some(gender), Some(rent), Some(city_name)) = (
        non_blank("name", input.name)?,
        non_blank("address", input.address)?,
        input.gender,
        input.rent,
        input.city_name,
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "name, address, gender, rent and city_name are required".into(),
        )));
    };
    validate_property_gender(&gender)?;
    validate_rent(rent)?;
    let city_id = resolve_city(&state, &city_name).await?;

    let created = PropertyRepo::create(
        &state.pool,
        &CreateProperty {
            name,
            address,
            gender,
            rent,
            city_id,
            images: input.images.unwrap_or_default(),
        },
    )
    .await?;
    tracing::info!(property_id = created.id, admin_id = admin.user_id, "Property created");

    let property = find_property(&state, created.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(PropertyBody { property }).with_message("Property created")),
    ))
}

/// GET /api/admin/properties/{id}
///
/// Includes amenities and testimonials of every status.
pub async fn get_property(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<AdminPropertyDetailBody>>> {
    let property = find_property(&state, id).await?;
    let amenities = AmenityRepo::list_by_property(&state.pool, id).await?;
    let testimonials = TestimonialRepo::list_by_property(&state.pool, id).await?;
    Ok(Json(ApiResponse::new(AdminPropertyDetailBody {
        property,
        amenities,
        testimonials,
    })))
}

/// PUT /api/admin/properties/{id}
pub async fn update_property(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<PropertyInput>,
) -> AppResult<Json<ApiResponse<PropertyBody>>> {
    if let Some(gender) = &input.gender {
        validate_property_gender(gender)?;
    }
    if let Some(rent) = input.rent {
        validate_rent(rent)?;
    }
    let city_id = match &input.city_name {
        Some(city_name) => Some(resolve_city(&state, city_name).await?),
        None => None,
    };

    let update = UpdateProperty {
        name: non_blank("name", input.name)?,
        address: non_blank("address", input.address)?,
        gender: input.gender,
        rent: input.rent,
        city_id,
        images: input.images,
    };
    PropertyRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::not_found("Property", id))?;

    let property = find_property(&state, id).await?;
    Ok(Json(
        ApiResponse::new(PropertyBody { property }).with_message("Property updated"),
    ))
}

/// DELETE /api/admin/properties/{id}
///
/// Removes the property with its amenities, testimonials, interest entries,
/// ratings and bookings.
pub async fn delete_property(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !PropertyRepo::delete_cascade(&state.pool, id).await? {
        return Err(AppError::not_found("Property", id));
    }
    tracing::info!(property_id = id, admin_id = admin.user_id, "Property deleted");
    Ok(Json(MessageResponse::new("Property and related data deleted")))
}

// ---------------------------------------------------------------------------
// Amenities
// ---------------------------------------------------------------------------

/// POST /api/admin/properties/{id}/amenities
pub async fn create_amenity(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(property_id): AppPath<DbId>,
    AppJson(input): AppJson<AmenityRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AmenityBody>>)> {
    let (Some(name), Some(amenity_type)) = (non_blank("name", input.name)?, input.amenity_type)
    else {
        return Err(AppError::Core(CoreError::Validation(
            "name and type are required".into(),
        )));
    };
    validate_amenity_type(&amenity_type)?;
    if let Some(icon) = &input.icon {
        validate_amenity_icon(icon)?;
    }
    find_property(&state, property_id).await?;

    let amenity = AmenityRepo::create(
        &state.pool,
        &CreateAmenity {
            property_id,
            name,
            amenity_type,
            icon: input.icon,
        },
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(AmenityBody { amenity }).with_message("Amenity added")),
    ))
}

/// GET /api/admin/amenities
pub async fn list_amenities(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<ApiResponse<AmenitiesBody>>> {
    let amenities = AmenityRepo::list_all_with_property(&state.pool).await?;
    Ok(Json(ApiResponse::new(AmenitiesBody { amenities })))
}

/// PUT /api/admin/amenities/{id}
pub async fn update_amenity(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateAmenity>,
) -> AppResult<Json<ApiResponse<AmenityBody>>> {
    if let Some(amenity_type) = &input.amenity_type {
        validate_amenity_type(amenity_type)?;
    }
    if let Some(icon) = &input.icon {
        validate_amenity_icon(icon)?;
    }
    if let Some(property_id) = input.property_id {
        find_property(&state, property_id).await?;
    }
    let input = UpdateAmenity {
        name: non_blank("name", input.name)?,
        ..input
    };

    let amenity = AmenityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Amenity", id))?;
    Ok(Json(
        ApiResponse::new(AmenityBody { amenity }).with_message("Amenity updated"),
    ))
}

/// DELETE /api/admin/amenities/{id}
pub async fn delete_amenity(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !AmenityRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Amenity", id));
    }
    Ok(Json(MessageResponse::new("Amenity deleted")))
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

/// POST /api/admin/properties/{id}/testimonials
///
/// Attributed to the calling admin's account.
pub async fn create_testimonial(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(property_id): AppPath<DbId>,
    AppJson(input): AppJson<AdminTestimonialRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<TestimonialBody>>)> {
    let content = normalize_content(input.content.as_deref().unwrap_or_default())?;
    find_property(&state, property_id).await?;

    let author = UserRepo::find_by_id(&state.pool, admin.user_id)
        .await?
        .ok_or(AppError::not_found("User", admin.user_id))?;
    let user_name = input
        .user_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or(author.full_name);

    let testimonial = TestimonialRepo::create(
        &state.pool,
        &CreateTestimonial {
            property_id,
            user_id: author.id,
            user_name,
            content,
        },
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(TestimonialBody { testimonial })),
    ))
}

/// GET /api/admin/testimonials
pub async fn list_testimonials(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<ApiResponse<TestimonialsBody>>> {
    let testimonials = TestimonialRepo::list_all_detail(&state.pool).await?;
    Ok(Json(ApiResponse::new(TestimonialsBody { testimonials })))
}

/// PUT /api/admin/testimonials/{id}
///
/// Moderate a testimonial: change its status, edit its content, or both.
pub async fn update_testimonial(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTestimonial>,
) -> AppResult<Json<ApiResponse<TestimonialBody>>> {
    if let Some(status) = &input.status {
        validate_testimonial_status(status)?;
    }
    let content = input.content.as_deref().map(normalize_content).transpose()?;
    let input = UpdateTestimonial {
        content,
        status: input.status,
    };

    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Testimonial", id))?;
    Ok(Json(ApiResponse::new(TestimonialBody { testimonial })))
}

/// DELETE /api/admin/testimonials/{id}
pub async fn delete_testimonial(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !TestimonialRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Testimonial", id));
    }
    Ok(Json(MessageResponse::new("Testimonial deleted")))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<ApiResponse<UsersBody>>> {
    let users = UserRepo::list(&state.pool)
        .await?
        .iter()
        .map(UserResponse::from)
        .collect();
    Ok(Json(ApiResponse::new(UsersBody { users })))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<Json<ApiResponse<UserBody>>> {
    if let Some(gender) = &input.gender {
        validate_user_gender(gender)?;
    }
    let input = UpdateUser {
        full_name: non_blank("full_name", input.full_name)?,
        phone: non_blank("phone", input.phone)?,
        college_name: non_blank("college_name", input.college_name)?,
        avatar_url: input.avatar_url.map(|url| url.trim().to_string()),
        gender: input.gender,
    };

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(
        ApiResponse::new(UserBody {
            user: UserResponse::from(&user),
        })
        .with_message("User updated"),
    ))
}

/// DELETE /api/admin/users/{id}
///
/// Removes the user with their testimonials, interest entries, ratings and
/// bookings.
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !UserRepo::delete_cascade(&state.pool, id).await? {
        return Err(AppError::not_found("User", id));
    }
    tracing::info!(user_id = id, admin_id = admin.user_id, "User deleted");
    Ok(Json(MessageResponse::new("User and related data deleted")))
}

// ---------------------------------------------------------------------------
// Interest entries and bookings
// ---------------------------------------------------------------------------

/// GET /api/admin/interested
pub async fn list_interested(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<ApiResponse<InterestedBody>>> {
    let interested = InterestedRepo::list_all_detail(&state.pool).await?;
    Ok(Json(ApiResponse::new(InterestedBody { interested })))
}

/// DELETE /api/admin/interested/{id}
pub async fn delete_interested(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !InterestedRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Interest entry", id));
    }
    Ok(Json(MessageResponse::new("Interest entry deleted")))
}

/// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> AppResult<Json<ApiResponse<BookingsBody>>> {
    let bookings = BookingRepo::list_all_detail(&state.pool).await?;
    Ok(Json(ApiResponse::new(BookingsBody { bookings })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_property(state: &AppState, id: DbId) -> AppResult<PropertyWithCity> {
    PropertyRepo::find_with_city(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Property", id))
}

/// Find-or-create the city by normalized name, returning its id.
async fn resolve_city(state: &AppState, raw_name: &str) -> AppResult<DbId> {
    let name = normalize_city_name(raw_name);
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "city_name must not be empty".into(),
        )));
    }
    Ok(CityRepo::find_or_create(&state.pool, &name).await?.id)
}
