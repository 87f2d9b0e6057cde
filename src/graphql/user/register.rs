/**
 * Registration Mutation
 *
 * This module implements the `register` mutation for creating a new
 * account.
 *
 * # Registration Process
 *
 * 1. Validate email format, password length, and name
 * 2. Check whether a user with this email already exists
 * 3. Hash the password using bcrypt
 * 4. Create the user in the database
 * 5. Generate a JWT token
 * 6. Return account fields, token, and a status message
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - JWT tokens are generated with 2-day expiration
 */

use async_graphql::{Context, Object, Result};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::sessions::create_token;
use crate::auth::users::{create_user, get_user_by_email};
use crate::auth::validate::{validate_email, validate_name, validate_password};
use crate::error::ApiError;
use crate::graphql::types::{AuthPayload, RegisterInput};
use crate::graphql::user::pool;

/// Registration mutation
#[derive(Default)]
pub struct RegisterMutation;

#[Object]
impl RegisterMutation {
    /// Register a new account and return a session token
    async fn register(&self, ctx: &Context<'_>, input: RegisterInput) -> Result<AuthPayload> {
        tracing::info!("Registration request for email: {}", input.email);

        validate_email(&input.email)?;
        validate_name(&input.name)?;
        validate_password(&input.password)?;

        let pool = pool(ctx)?;

        if get_user_by_email(pool, &input.email)
            .await
            .map_err(ApiError::from)?
            .is_some()
        {
            tracing::warn!("Email already registered: {}", input.email);
            return Err(
                ApiError::conflict(format!("user {} already exists", input.email)).into(),
            );
        }

        let password_hash = hash(&input.password, DEFAULT_COST).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            ApiError::from(e)
        })?;

        let user = create_user(pool, input.email.clone(), input.name.clone(), password_hash)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create user: {:?}", e);
                ApiError::from(e)
            })?;

        let token = create_token(user.id).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            ApiError::from(e)
        })?;

        tracing::info!("User created successfully: {} ({})", user.name, user.email);

        let message = format!("User {} successfully created", user.name);
        Ok(AuthPayload {
            user: user.into(),
            token,
            message,
        })
    }
}
