//! Route definitions for the public `/properties` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::properties;
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET    /?city={name}              -> list_by_city
/// GET    /{id}                      -> get_detail
/// POST   /{id}/interested           -> mark_interested
/// DELETE /{id}/interested           -> unmark_interested
/// GET    /{id}/testimonials         -> list_testimonials
/// POST   /{id}/testimonials         -> submit_testimonial
/// POST   /{id}/rate                 -> rate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(properties::list_by_city))
        .route("/{id}", get(properties::get_detail))
        .route(
            "/{id}/interested",
            post(properties::mark_interested).delete(properties::unmark_interested),
        )
        .route(
            "/{id}/testimonials",
            get(properties::list_testimonials).post(properties::submit_testimonial),
        )
        .route("/{id}/rate", post(properties::rate))
}
