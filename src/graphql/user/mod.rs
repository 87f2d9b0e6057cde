//! Account Resolvers
//!
//! One module per account operation, merged into a single query and a
//! single mutation object.
//!
//! # Module Structure
//!
//! ```text
//! user/
//! ├── mod.rs         - Merged objects and auth helpers
//! ├── me.rs          - Current user query
//! ├── register.rs    - Registration mutation
//! ├── login.rs       - Login mutation
//! ├── update_name.rs - Name update mutation
//! └── delete.rs      - Account deletion mutation
//! ```
//!
//! # Authentication
//!
//! `me`, `updateName`, and `deleteAccount` require a valid bearer token.
//! The [`authenticated_user`] helper verifies the token from the request
//! data and loads the user row, failing with `UNAUTHENTICATED` when the
//! token is missing or invalid.

use async_graphql::{Context, MergedObject};
use sqlx::PgPool;

use crate::auth::{sessions, users, User};
use crate::error::ApiError;
use crate::graphql::AuthToken;

/// Current user query
pub mod me;

/// Registration mutation
pub mod register;

/// Login mutation
pub mod login;

/// Name update mutation
pub mod update_name;

/// Account deletion mutation
pub mod delete;

/// Merged account queries
#[derive(MergedObject, Default)]
pub struct UserQuery(me::MeQuery);

/// Merged account mutations
#[derive(MergedObject, Default)]
pub struct UserMutation(
    register::RegisterMutation,
    login::LoginMutation,
    update_name::UpdateNameMutation,
    delete::DeleteAccountMutation,
);

/// Get the database pool from the GraphQL context
pub(crate) fn pool<'a>(ctx: &'a Context<'_>) -> Result<&'a PgPool, ApiError> {
    ctx.data_opt::<PgPool>()
        .ok_or_else(|| ApiError::config("database pool missing from schema data"))
}

/// Resolve the authenticated user for the current request
///
/// Verifies the bearer token attached by the HTTP layer and loads the
/// user row it refers to.
///
/// # Errors
///
/// * `UNAUTHENTICATED` - missing, invalid, or expired token
/// * `NOT_FOUND` - the token's user no longer exists
pub(crate) async fn authenticated_user(ctx: &Context<'_>) -> Result<User, ApiError> {
    let token = ctx
        .data_opt::<AuthToken>()
        .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

    let user_id = sessions::user_id_from_token(&token.0)?;

    users::get_user_by_id(pool(ctx)?, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("user"))
}
