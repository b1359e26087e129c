//! User entity model and DTOs.

use pglife_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub password_hash: String,
    pub college_name: String,
    pub gender: String,
    pub avatar_url: String,
    pub is_admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub college_name: String,
    pub gender: String,
    /// `None` when no avatar has been set.
    pub avatar_url: Option<String>,
    pub is_admin: bool,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            college_name: user.college_name.clone(),
            gender: user.gender.clone(),
            avatar_url: Some(user.avatar_url.clone()).filter(|url| !url.is_empty()),
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub full_name: String,
    pub phone: String,
    /// Must already be normalized (trimmed, lowercase).
    pub email: String,
    pub password_hash: String,
    pub college_name: String,
    pub gender: String,
}

/// DTO for updating an existing user's profile. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub college_name: Option<String>,
    pub gender: Option<String>,
    pub avatar_url: Option<String>,
}
