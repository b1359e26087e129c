//! Handlers for the self-service `/users` resource.
//!
//! Every route here acts on the caller's own account only.

use axum::extract::State;
use axum::Json;
use pglife_core::error::CoreError;
use pglife_core::types::DbId;
use pglife_db::models::property::PropertyWithCity;
use pglife_db::models::user::{UpdateUser, UserResponse};
use pglife_db::repositories::{InterestedRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub college_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserBody {
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct InterestedPropertiesBody {
    pub properties: Vec<PropertyWithCity>,
}

/// GET /api/users/{id}
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<UserBody>>> {
    auth.ensure_self(id)?;
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(ApiResponse::new(UserBody {
        user: UserResponse::from(&user),
    })))
}

/// PUT /api/users/{id}
///
/// Blank fields are rejected; absent fields are left unchanged.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<UserBody>>> {
    auth.ensure_self(id)?;

    let update = UpdateUser {
        full_name: non_blank("full_name", input.full_name)?,
        phone: non_blank("phone", input.phone)?,
        college_name: non_blank("college_name", input.college_name)?,
        ..Default::default()
    };

    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(
        ApiResponse::new(UserBody {
            user: UserResponse::from(&user),
        })
        .with_message("Profile updated"),
    ))
}

/// GET /api/users/{id}/interested
pub async fn list_interested(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ApiResponse<InterestedPropertiesBody>>> {
    auth.ensure_self(id)?;
    let properties = InterestedRepo::list_properties_for_user(&state.pool, id).await?;
    Ok(Json(ApiResponse::new(InterestedPropertiesBody {
        properties,
    })))
}

/// Trim an optional text field, rejecting one that is present but blank.
pub(crate) fn non_blank(field: &str, value: Option<String>) -> AppResult<Option<String>> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Err(AppError::Core(CoreError::Validation(format!(
            "{field} must not be empty"
        )))),
        other => Ok(other),
    }
}
