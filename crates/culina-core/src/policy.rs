//! Validation and normalization policy for user-supplied fields.
//!
//! The stores apply these rules before touching the database so the same
//! policy holds for the HTTP API and the CLI.

use crate::error::{Error, Result};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Maximum length for user-supplied text fields (emails, names, titles).
pub const MAX_FIELD_LEN: usize = 255;

/// Validate and normalize an email address.
///
/// The address is trimmed and lowercased, so lookups and the unique
/// constraint are case-insensitive.
pub fn normalize_email(raw: &str) -> Result<String> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(Error::validation_field("email", "this field is required"));
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    };
    if !valid {
        return Err(Error::validation_field(
            "email",
            "enter a valid email address",
        ));
    }
    if email.chars().count() > MAX_FIELD_LEN {
        return Err(Error::validation_field(
            "email",
            format!("ensure this field has at most {MAX_FIELD_LEN} characters"),
        ));
    }
    Ok(email.to_lowercase())
}

/// Validate a plaintext password against the length policy.
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::validation_field(
            "password",
            format!("ensure this field has at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

/// Validate a required name-like field (tag name, ingredient name, recipe
/// title).
///
/// Returns the trimmed value.
pub fn validate_name(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::validation_field(field, "this field is required"));
    }
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(Error::validation_field(
            field,
            format!("ensure this field has at most {MAX_FIELD_LEN} characters"),
        ));
    }
    Ok(value.to_string())
}

/// Validate an optional name-like field (the user display name).
///
/// An empty value is fine; a present one is trimmed and length-capped.
pub fn validate_optional_name(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.chars().count() > MAX_FIELD_LEN {
        return Err(Error::validation_field(
            field,
            format!("ensure this field has at most {MAX_FIELD_LEN} characters"),
        ));
    }
    Ok(value.to_string())
}
