//! Field-level checks shared by the customer and employee entities.
//!
//! Limits mirror the column sizes declared in the migrations.

use crate::errors::ModelError;

pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_MAX: usize = 32;

pub fn validate_name(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > NAME_MAX {
        return Err(ModelError::Validation(format!("{field} must be at most {NAME_MAX} characters")));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("email is required".into()));
    }
    if email.chars().count() > EMAIL_MAX {
        return Err(ModelError::Validation(format!("email must be at most {EMAIL_MAX} characters")));
    }
    let mut parts = email.split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    };
    if !valid {
        return Err(ModelError::Validation("email should be valid".into()));
    }
    Ok(())
}

pub fn validate_phone(phone: Option<&str>) -> Result<(), ModelError> {
    optional_max_len("phone", phone, PHONE_MAX)
}

pub fn optional_max_len(field: &str, value: Option<&str>, max: usize) -> Result<(), ModelError> {
    match value {
        Some(v) if v.chars().count() > max => {
            Err(ModelError::Validation(format!("{field} must be at most {max} characters")))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_must_not_be_blank() {
        assert!(validate_name("firstName", "Ada").is_ok());
        let err = validate_name("firstName", "   ").unwrap_err();
        assert_eq!(err.to_string(), "validation error: firstName is required");
        assert!(validate_name("lastName", &"x".repeat(NAME_MAX + 1)).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a@").is_err());
        assert!(validate_email("a@b@c").is_err());
        assert!(validate_email("a b@x.com").is_err());
    }

    #[test]
    fn optional_fields_only_checked_when_present() {
        assert!(validate_phone(None).is_ok());
        assert!(validate_phone(Some("+1 555 0100")).is_ok());
        assert!(validate_phone(Some(&"9".repeat(PHONE_MAX + 1))).is_err());
        assert!(optional_max_len("city", Some(""), 10).is_ok());
    }
}
