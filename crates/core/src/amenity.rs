//! Amenity categories and icon identifiers.

use crate::error::CoreError;

/// All valid amenity types.
pub const VALID_AMENITY_TYPES: &[&str] = &["Building", "Common Area", "Bedroom", "Washroom"];

/// All valid amenity icon identifiers, as understood by the frontend.
pub const VALID_AMENITY_ICONS: &[&str] = &[
    "wifi",
    "tv",
    "ac",
    "geyser",
    "powerbackup",
    "fireext",
    "bed",
    "parking",
    "rowater",
    "dining",
    "washingmachine",
    "lift",
    "cctv",
];

/// Validate an amenity type.
pub fn validate_amenity_type(amenity_type: &str) -> Result<(), CoreError> {
    if VALID_AMENITY_TYPES.contains(&amenity_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid amenity type '{amenity_type}'. Must be one of: {}",
            VALID_AMENITY_TYPES.join(", ")
        )))
    }
}

/// Validate an amenity icon identifier.
pub fn validate_amenity_icon(icon: &str) -> Result<(), CoreError> {
    if VALID_AMENITY_ICONS.contains(&icon) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid amenity icon '{icon}'")))
    }
}
