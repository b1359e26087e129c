//! Property listing rules: gender restriction, rent, and city naming.

use crate::error::CoreError;

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";
pub const GENDER_UNISEX: &str = "unisex";

/// All valid property gender restrictions.
pub const VALID_PROPERTY_GENDERS: &[&str] = &[GENDER_MALE, GENDER_FEMALE, GENDER_UNISEX];

/// Validate a property's gender restriction.
pub fn validate_property_gender(gender: &str) -> Result<(), CoreError> {
    if VALID_PROPERTY_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid gender '{gender}'. Must be one of: {}",
            VALID_PROPERTY_GENDERS.join(", ")
        )))
    }
}

/// Monthly rent must be a positive number.
pub fn validate_rent(rent: f64) -> Result<(), CoreError> {
    if rent.is_finite() && rent >= 1.0 {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Rent must be a positive amount".to_string(),
        ))
    }
}

/// City names are stored trimmed and lowercase so lookups are case-insensitive.
pub fn normalize_city_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_genders() {
        for g in VALID_PROPERTY_GENDERS {
            assert!(validate_property_gender(g).is_ok());
        }
        assert!(validate_property_gender("other").is_err());
    }

    #[test]
    fn rent_must_be_positive() {
        assert!(validate_rent(8500.0).is_ok());
        assert!(validate_rent(0.0).is_err());
        assert!(validate_rent(-1.0).is_err());
    }

    #[test]
    fn city_name_normalized() {
        assert_eq!(normalize_city_name("  Delhi "), "delhi");
    }
}
