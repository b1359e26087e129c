pub mod admin;
pub mod auth;
pub mod bookings;
pub mod cities;
pub mod properties;
pub mod users;
