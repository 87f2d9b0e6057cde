/**
 * API Error Types
 *
 * This module defines the error types used by resolvers and database code.
 *
 * # Error Categories
 *
 * ## Request errors
 *
 * Errors caused by the caller:
 * - Missing or invalid bearer tokens
 * - Validation failures on input fields
 * - Conflicts (duplicate email) and missing records
 *
 * ## Server errors
 *
 * Errors caused by infrastructure:
 * - Database failures
 * - Password hashing failures
 * - Configuration problems at startup
 */

use thiserror::Error;

/// Errors that can occur while serving account operations
///
/// Each variant carries enough context to produce a useful GraphQL error.
/// The `code` method maps variants onto the machine-readable error codes
/// exposed in GraphQL error extensions.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failure (missing, invalid, or expired token,
    /// or an operation on an account the caller does not own)
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// A referenced record does not exist
    #[error("can't find {what}")]
    NotFound {
        /// What was being looked up (e.g. "user")
        what: String,
    },

    /// A uniqueness conflict (e.g. email already registered)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Input validation failure
    #[error("validation failed for '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Server configuration error (missing environment, bad pool config)
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message
        message: String,
    },

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a new authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Machine-readable error code exposed in GraphQL error extensions
    ///
    /// # Code Mapping
    ///
    /// - `Unauthorized`, `Token` - `UNAUTHENTICATED`
    /// - `NotFound` - `NOT_FOUND`
    /// - `Conflict` - `CONFLICT`
    /// - `Validation` - `BAD_USER_INPUT`
    /// - `Config`, `Database`, `Hash` - `INTERNAL`
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } | Self::Token(_) => "UNAUTHENTICATED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Validation { .. } => "BAD_USER_INPUT",
            Self::Config { .. } | Self::Database(_) | Self::Hash(_) => "INTERNAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_error() {
        let error = ApiError::unauthorized("missing bearer token");
        match error {
            ApiError::Unauthorized { message } => {
                assert_eq!(message, "missing bearer token");
            }
            _ => panic!("Expected Unauthorized"),
        }
    }

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("email", "invalid email format");
        match error {
            ApiError::Validation { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "invalid email format");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_not_found_message() {
        let error = ApiError::not_found("user");
        assert_eq!(error.to_string(), "can't find user");
    }

    #[test]
    fn test_code_mapping() {
        assert_eq!(ApiError::unauthorized("x").code(), "UNAUTHENTICATED");
        assert_eq!(ApiError::not_found("user").code(), "NOT_FOUND");
        assert_eq!(ApiError::conflict("x").code(), "CONFLICT");
        assert_eq!(ApiError::validation("f", "m").code(), "BAD_USER_INPUT");
        assert_eq!(ApiError::config("x").code(), "INTERNAL");
    }
}
