//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument. Operations that must be
//! atomic open their own transaction.

pub mod amenity_repo;
pub mod booking_repo;
pub mod city_repo;
pub mod interested_repo;
pub mod property_repo;
pub mod rating_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use amenity_repo::AmenityRepo;
pub use booking_repo::BookingRepo;
pub use city_repo::CityRepo;
pub use interested_repo::InterestedRepo;
pub use property_repo::PropertyRepo;
pub use rating_repo::RatingRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
