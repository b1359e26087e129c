//! Handlers for the `/auth` resource (signup, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pglife_core::error::CoreError;
use pglife_core::roles::role_for;
use pglife_core::user::{normalize_email, validate_user_gender};
use pglife_core::validation::validate_input;
use pglife_db::models::user::{CreateUser, User, UserResponse};
use pglife_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, message = "College name is required"))]
    pub college_name: String,
    pub gender: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body returned by signup and login.
#[derive(Debug, Serialize)]
pub struct AuthBody {
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/signup
///
/// Register a regular (non-admin) user and return a token for them.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthBody>>)> {
    let input = SignupRequest {
        full_name: input.full_name.trim().to_string(),
        phone: input.phone.trim().to_string(),
        email: normalize_email(&input.email),
        college_name: input.college_name.trim().to_string(),
        ..input
    };
    validate_input(&input)?;
    validate_password_strength(&input.password)?;
    validate_user_gender(&input.gender)?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "An account with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            full_name: input.full_name,
            phone: input.phone,
            email: input.email,
            password_hash,
            college_name: input.college_name,
            gender: input.gender,
        },
    )
    .await?;
    tracing::info!(user_id = user.id, "User registered");

    let body = auth_body(&state, &user)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(body).with_message("Signup successful")),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email + password.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthBody>>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &normalize_email(&input.email))
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    let body = auth_body(&state, &user)?;
    Ok(Json(ApiResponse::new(body).with_message("Login successful")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn auth_body(state: &AppState, user: &User) -> AppResult<AuthBody> {
    let token = generate_access_token(user.id, role_for(user.is_admin), &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    Ok(AuthBody {
        token,
        user: UserResponse::from(user),
    })
}
