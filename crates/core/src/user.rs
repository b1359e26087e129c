//! User account rules.

use crate::error::CoreError;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// All valid user gender values.
pub const VALID_USER_GENDERS: &[&str] = &["male", "female", "other"];

/// Validate a user's gender.
pub fn validate_user_gender(gender: &str) -> Result<(), CoreError> {
    if VALID_USER_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid gender '{gender}'. Must be one of: {}",
            VALID_USER_GENDERS.join(", ")
        )))
    }
}

/// Emails are unique case-insensitively; store them trimmed and lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_normalized() {
        assert_eq!(normalize_email(" Asha@Example.COM "), "asha@example.com");
    }

    #[test]
    fn gender_vocabulary() {
        assert!(validate_user_gender("other").is_ok());
        assert!(validate_user_gender("unisex").is_err());
    }
}
