//! Testimonial moderation statuses and content limits.

use crate::error::CoreError;

/// Minimum testimonial length in characters.
pub const MIN_CONTENT_LENGTH: u64 = 5;

/// Maximum testimonial length in characters.
pub const MAX_CONTENT_LENGTH: u64 = 500;

pub const TESTIMONIAL_STATUS_PENDING: &str = "pending";
pub const TESTIMONIAL_STATUS_APPROVED: &str = "approved";
pub const TESTIMONIAL_STATUS_REJECTED: &str = "rejected";

/// All valid testimonial status values.
pub const VALID_TESTIMONIAL_STATUSES: &[&str] = &[
    TESTIMONIAL_STATUS_PENDING,
    TESTIMONIAL_STATUS_APPROVED,
    TESTIMONIAL_STATUS_REJECTED,
];

/// Validate a testimonial status string.
pub fn validate_testimonial_status(status: &str) -> Result<(), CoreError> {
    if VALID_TESTIMONIAL_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid testimonial status '{status}'. Must be one of: {}",
            VALID_TESTIMONIAL_STATUSES.join(", ")
        )))
    }
}

/// Trim testimonial content and check its length.
pub fn normalize_content(content: &str) -> Result<String, CoreError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Content is required".to_string()));
    }

    let len = trimmed.chars().count() as u64;
    if !(MIN_CONTENT_LENGTH..=MAX_CONTENT_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Content must be between {MIN_CONTENT_LENGTH} and {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}
