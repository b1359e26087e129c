//! Domain rules for the PG Life marketplace.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` and `api`
//! crates build on these types and validators.

pub mod amenity;
pub mod booking;
pub mod clock;
pub mod error;
pub mod property;
pub mod rating;
pub mod roles;
pub mod testimonial;
pub mod types;
pub mod user;
pub mod validation;
