//! Bridge from `validator` derive checks to [`CoreError::Validation`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the input's `#[validate(...)]` rules, folding failures into one message.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// One message per failing field, sorted by field name for stable output.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, errs)| {
            errs.iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{field} is invalid"))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Signup {
        #[validate(email(message = "Email is invalid"))]
        email: String,
        #[validate(length(min = 6))]
        password: String,
    }

    #[test]
    fn valid_input_passes() {
        let input = Signup {
            email: "a@b.co".into(),
            password: "secret123".into(),
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn messages_are_joined_in_field_order() {
        let input = Signup {
            email: "nope".into(),
            password: "x".into(),
        };
        assert_matches!(
            validate_input(&input),
            Err(CoreError::Validation(msg)) if msg == "Email is invalid; password is invalid"
        );
    }
}
