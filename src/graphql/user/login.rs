/**
 * Login Mutation
 *
 * This module implements the `login` mutation for authenticating an
 * existing account.
 *
 * # Authentication Process
 *
 * 1. Validate the input shape
 * 2. Look up the user by email
 * 3. Verify the password using bcrypt
 * 4. Generate a JWT token
 * 5. Return account fields, token, and a status message
 *
 * # Security
 *
 * - Password verification uses constant-time comparison (via bcrypt)
 * - Passwords are never logged or returned in responses
 */

use async_graphql::{Context, Object, Result};
use bcrypt::verify;

use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::auth::validate::{validate_email, validate_password};
use crate::error::ApiError;
use crate::graphql::types::AuthPayload;
use crate::graphql::user::pool;

/// Login mutation
#[derive(Default)]
pub struct LoginMutation;

#[Object]
impl LoginMutation {
    /// Authenticate with email and password, returning a session token
    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<AuthPayload> {
        tracing::info!("Login request for: {}", email);

        validate_email(&email)?;
        validate_password(&password)?;

        let pool = pool(ctx)?;

        let user = get_user_by_email(pool, &email)
            .await
            .map_err(|e| {
                tracing::error!("Database error: {:?}", e);
                ApiError::from(e)
            })?
            .ok_or_else(|| {
                tracing::warn!("User not found: {}", email);
                ApiError::not_found("user")
            })?;

        let valid = verify(&password, &user.password_hash).map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            ApiError::from(e)
        })?;

        if !valid {
            tracing::warn!("Invalid password for user: {}", email);
            return Err(ApiError::unauthorized("incorrect login or password").into());
        }

        let token = create_token(user.id).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            ApiError::from(e)
        })?;

        tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

        let message = format!("User {} successfully logged", user.name);
        Ok(AuthPayload {
            user: user.into(),
            token,
            message,
        })
    }
}
