/**
 * Current User Query
 *
 * This module implements the `me` query, which returns the account
 * belonging to the bearer token on the request.
 *
 * # Authentication
 *
 * Requires a valid JWT token in the `Authorization` header. The token is
 * verified and the user ID is extracted to fetch the account.
 *
 * # Response
 *
 * Returns the public account fields (no password hash) and a
 * human-readable status message.
 */

use async_graphql::{Context, Object, Result};

use crate::graphql::types::AccountPayload;
use crate::graphql::user::authenticated_user;

/// Current user query
#[derive(Default)]
pub struct MeQuery;

#[Object]
impl MeQuery {
    /// Get the currently authenticated user's account
    async fn me(&self, ctx: &Context<'_>) -> Result<AccountPayload> {
        let user = authenticated_user(ctx).await?;

        tracing::info!("User {} ({}) resolved via token", user.name, user.email);

        let message = format!("User {} successfully logged via token", user.name);
        Ok(AccountPayload {
            user: user.into(),
            message,
        })
    }
}
