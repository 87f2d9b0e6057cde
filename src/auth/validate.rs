//! Input validation for account fields.
//!
//! Keeps the same rules across register, login, and update operations:
//! a plausible email shape, a minimum password length, and a bounded name.

use crate::error::ApiError;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 8;

/// Maximum accepted display name length
const MAX_NAME_LEN: usize = 64;

/// Validate email format (basic shape check)
///
/// Requires a non-empty local part and a domain separated by '@'.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ApiError::validation("email", "invalid email format"))
    }
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

/// Validate a display name
///
/// Names must be non-empty after trimming and at most 64 characters.
pub fn validate_name(name: &str) -> Result<(), ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("name", "name cannot be empty"));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::validation(
            "name",
            format!("name cannot be longer than {} characters", MAX_NAME_LEN),
        ));
    }
    Ok(())
}
