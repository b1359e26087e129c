//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /properties                    -> list_properties
/// POST   /properties                    -> create_property
/// GET    /properties/{id}               -> get_property
/// PUT    /properties/{id}               -> update_property
/// DELETE /properties/{id}               -> delete_property
/// POST   /properties/{id}/amenities     -> create_amenity
/// POST   /properties/{id}/testimonials  -> create_testimonial
/// GET    /amenities                     -> list_amenities
/// PUT    /amenities/{id}                -> update_amenity
/// DELETE /amenities/{id}                -> delete_amenity
/// GET    /testimonials                  -> list_testimonials
/// PUT    /testimonials/{id}             -> update_testimonial
/// DELETE /testimonials/{id}             -> delete_testimonial
/// GET    /users                         -> list_users
/// PUT    /users/{id}                    -> update_user
/// DELETE /users/{id}                    -> delete_user
/// GET    /interested                    -> list_interested
/// DELETE /interested/{id}               -> delete_interested
/// GET    /bookings                      -> list_bookings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/properties",
            get(admin::list_properties).post(admin::create_property),
        )
        .route(
            "/properties/{id}",
            get(admin::get_property)
                .put(admin::update_property)
                .delete(admin::delete_property),
        )
        .route("/properties/{id}/amenities", post(admin::create_amenity))
        .route(
            "/properties/{id}/testimonials",
            post(admin::create_testimonial),
        )
        .route("/amenities", get(admin::list_amenities))
        .route(
            "/amenities/{id}",
            put(admin::update_amenity).delete(admin::delete_amenity),
        )
        .route("/testimonials", get(admin::list_testimonials))
        .route(
            "/testimonials/{id}",
            put(admin::update_testimonial).delete(admin::delete_testimonial),
        )
        .route("/users", get(admin::list_users))
        .route(
            "/users/{id}",
            put(admin::update_user).delete(admin::delete_user),
        )
        .route("/interested", get(admin::list_interested))
        .route("/interested/{id}", delete(admin::delete_interested))
        .route("/bookings", get(admin::list_bookings))
}
