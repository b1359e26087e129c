//! Route definitions for the self-service `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET /{id}              -> get_profile
/// PUT /{id}              -> update_profile
/// GET /{id}/interested   -> list_interested
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/{id}/interested", get(users::list_interested))
}
