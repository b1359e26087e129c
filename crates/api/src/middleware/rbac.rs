//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pglife_core::error::CoreError;
use pglife_core::roles::ROLE_ADMIN;
use pglife_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires an administrator. Rejects with 403 Forbidden otherwise.
///
/// The token's role claim is checked first, then the user's current
/// `is_admin` flag, so a revoked admin is refused before the token expires.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(forbidden());
        }

        let is_admin = UserRepo::find_by_id(&state.pool, user.user_id)
            .await?
            .is_some_and(|u| u.is_admin);
        if !is_admin {
            tracing::warn!(user_id = user.user_id, "Admin token for non-admin user");
            return Err(forbidden());
        }

        Ok(RequireAdmin(user))
    }
}

fn forbidden() -> AppError {
    AppError::Core(CoreError::Forbidden("Admin access required".into()))
}
