//! Route definitions for the `/cities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cities;
use crate::state::AppState;

/// Routes mounted at `/cities`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(cities::list))
}
