pub mod admin;
pub mod auth;
pub mod bookings;
pub mod cities;
pub mod health;
pub mod properties;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                     register (public)
/// /auth/login                                      login (public)
///
/// /cities                                          list (public)
///
/// /properties?city={name}                          list by city (optional auth)
/// /properties/{id}                                 detail (optional auth)
/// /properties/{id}/interested                      mark (POST), unmark (DELETE)
/// /properties/{id}/testimonials                    approved list, submit (POST)
/// /properties/{id}/rate                            submit rating (POST)
///
/// /bookings                                        create (POST)
/// /bookings/mine                                   caller's bookings
///
/// /users/{id}                                      get, update (self only)
/// /users/{id}/interested                           interested properties (self only)
///
/// /admin/properties                                list, create (admin only)
/// /admin/properties/{id}                           get, update, delete
/// /admin/properties/{id}/amenities                 add amenity (POST)
/// /admin/properties/{id}/testimonials              add testimonial (POST)
/// /admin/amenities                                 list
/// /admin/amenities/{id}                            update, delete
/// /admin/testimonials                              list
/// /admin/testimonials/{id}                         moderate, delete
/// /admin/users                                     list
/// /admin/users/{id}                                update, delete
/// /admin/interested                                list
/// /admin/interested/{id}                           delete
/// /admin/bookings                                  list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/cities", cities::router())
        .nest("/properties", properties::router())
        .nest("/bookings", bookings::router())
        .nest("/users", users::router())
        .nest("/admin", admin::router())
}
