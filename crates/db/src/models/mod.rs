//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches, where the entity is editable

pub mod amenity;
pub mod booking;
pub mod city;
pub mod interested;
pub mod property;
pub mod rating;
pub mod testimonial;
pub mod user;
